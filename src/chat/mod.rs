//! Scripted support chatbot
//!
//! Messages are classified into an [`Intent`] by ordered keyword
//! containment, and the reply is a uniform random pick among that intent's
//! canned responses.

pub mod conversation;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub use conversation::{Conversation, Message, Sender};

/// Probability of answering an unmatched message with encouragement
const ENCOURAGEMENT_PROBABILITY: f64 = 0.3;

/// Category of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Anxiety,
    Breathing,
    Sadness,
    Stress,
    Professional,
    Support,
    Techniques,
    Encouragement,
    Default,
}

impl Intent {
    /// Intents that are matched by keywords, in priority order
    pub const CLASSIFIED: [Intent; 8] = [
        Intent::Greeting,
        Intent::Anxiety,
        Intent::Breathing,
        Intent::Sadness,
        Intent::Stress,
        Intent::Professional,
        Intent::Support,
        Intent::Techniques,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &["hola", "buenos", "hey"],
            Intent::Anxiety => &["ansiedad", "ansioso", "ansiosa", "nervios"],
            Intent::Breathing => &["respirar", "respiración", "respiro"],
            Intent::Sadness => &["triste", "tristeza", "deprimido", "deprimida"],
            Intent::Stress => &[
                "estrés",
                "estres",
                "estresado",
                "estresada",
                "abrumado",
                "abrumada",
            ],
            Intent::Professional => &[
                "psicólogo",
                "psicologo",
                "psicóloga",
                "psicologa",
                "terapia",
                "terapeuta",
            ],
            Intent::Support => &["ayuda", "apoyo", "solo", "sola"],
            Intent::Techniques => &["técnica", "tecnica", "herramienta", "método"],
            Intent::Encouragement | Intent::Default => &[],
        }
    }

    pub fn responses(&self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &[
                "Hola, estoy aquí para acompañarte. ¿Cómo te sientes hoy?",
                "¡Hola! Me alegra que hayas decidido conversar conmigo. ¿En qué puedo ayudarte?",
                "Bienvenido/a. Este es un espacio seguro para ti. ¿Qué tienes en mente?",
            ],
            Intent::Anxiety => &[
                "Entiendo que sientes ansiedad. Es completamente normal y no estás solo/a en esto. ¿Puedes contarme qué situación específica te genera ansiedad?",
                "La ansiedad puede ser abrumadora, pero recuerda que es temporal. ¿Has probado alguna técnica de respiración? Te puedo guiar en una.",
                "Siento que estés pasando por un momento difícil. La ansiedad es una respuesta natural del cuerpo. ¿Te gustaría hablar sobre lo que está pasando?",
            ],
            Intent::Breathing => &[
                "Excelente idea. Vamos a hacer un ejercicio simple: Inhala por 4 segundos, mantén por 4, y exhala por 6. ¿Estás listo/a?",
                "La respiración consciente es muy efectiva. Intenta inhalar lentamente por la nariz, pausa, y exhala despacio por la boca. Hazlo conmigo.",
                "¿Te parece si practicamos la técnica 4-7-8? Inhala por 4, mantén por 7, exhala por 8. Es muy relajante.",
            ],
            Intent::Sadness => &[
                "Lamento que te sientas triste. Es válido sentir tristeza, es parte de ser humano. ¿Te gustaría contarme qué te tiene así?",
                "La tristeza puede ser pesada, pero no eres débil por sentirla. ¿Hay algo específico que haya desencadenado estos sentimientos?",
                "Te acompaño en este momento. A veces hablar sobre lo que nos entristece puede ayudar a procesarlo mejor.",
            ],
            Intent::Stress => &[
                "El estrés puede ser agotador. ¿Has identificado qué está causando principalmente tu estrés?",
                "Entiendo que te sientes abrumado/a. El estrés es la forma en que nuestro cuerpo responde a las demandas. ¿Qué te está presionando más?",
                "Es importante reconocer cuando estamos estresados. ¿Te gustaría explorar algunas estrategias para manejarlo mejor?",
            ],
            Intent::Professional => &[
                "Hablar con un profesional de salud mental es una gran decisión. Un psicólogo puede acompañarte con herramientas adaptadas a ti.",
                "Buscar terapia es un acto de valentía y autocuidado. ¿Te gustaría que conversemos sobre qué esperas de ese espacio?",
            ],
            Intent::Support => &[
                "Estoy aquí para ti. No tienes que enfrentar esto solo/a.",
                "Eres más fuerte de lo que crees. Cada día que sigues adelante es una prueba de tu fortaleza.",
                "Es valioso que busques apoyo. Cuidar tu salud mental es tan importante como cuidar tu salud física.",
                "Recuerda que está bien no estar bien todo el tiempo. Eres humano/a y mereces compasión, especialmente de ti mismo/a.",
            ],
            Intent::Techniques => &[
                "Te puedo enseñar algunas técnicas útiles: respiración profunda, relajación muscular progresiva, o mindfulness. ¿Cuál te gustaría probar?",
                "Hay varias herramientas que pueden ayudarte. ¿Te interesa aprender sobre técnicas de grounding, respiración, o tal vez journaling?",
            ],
            Intent::Encouragement => &[
                "Has tomado el primer paso al reconocer cómo te sientes. Eso requiere valentía.",
                "Cada conversación que tienes aquí es un acto de autocuidado. Estás haciendo un gran trabajo.",
                "Aunque no lo sientas ahora, estás progresando. El solo hecho de estar aquí lo demuestra.",
            ],
            Intent::Default => &[
                "Gracias por compartir eso conmigo. ¿Puedes contarme más al respecto?",
                "Te escucho. ¿Cómo te hace sentir eso?",
                "Entiendo. ¿Hay algo más que quieras explorar sobre este tema?",
                "Cuéntame más sobre cómo te sientes.",
            ],
        }
    }
}

/// Classify a message by the first intent whose keyword it contains
pub fn classify(message: &str) -> Option<Intent> {
    let lower = message.to_lowercase();
    Intent::CLASSIFIED
        .into_iter()
        .find(|intent| intent.keywords().iter().any(|kw| lower.contains(kw)))
}

/// Rule-based responder
#[derive(Debug)]
pub struct Chatbot<R = SmallRng> {
    rng: R,
}

impl Chatbot<SmallRng> {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for Chatbot<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Chatbot<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Opening message of every conversation
    pub fn welcome(&self) -> &'static str {
        Intent::Greeting.responses()[0]
    }

    /// Pick the intent that will answer `message`
    pub fn resolve_intent(&mut self, message: &str) -> Intent {
        match classify(message) {
            Some(intent) => intent,
            None if self.rng.gen_bool(ENCOURAGEMENT_PROBABILITY) => Intent::Encouragement,
            None => Intent::Default,
        }
    }

    /// Produce a reply for `message`
    pub fn respond(&mut self, message: &str) -> &'static str {
        let intent = self.resolve_intent(message);
        let reply = intent
            .responses()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Intent::Default.responses()[0]);
        tracing::debug!(?intent, "chatbot reply selected");
        reply
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
