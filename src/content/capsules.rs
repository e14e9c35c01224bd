//! Educational capsules
//!
//! Short articles about mental health. The body uses a tiny markup: a line
//! wrapped in `**` is a heading, a line starting with `•` is a bullet.

/// A short educational article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capsule {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
}

/// Kind of a content line after markup parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Bullet,
    Text,
    Blank,
}

/// Classify a line of capsule content and strip its markup
pub fn parse_line(line: &str) -> (LineKind, &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        (LineKind::Blank, "")
    } else if let Some(inner) = trimmed
        .strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
    {
        (LineKind::Heading, inner)
    } else if let Some(rest) = trimmed.strip_prefix('•') {
        (LineKind::Bullet, rest.trim_start())
    } else {
        (LineKind::Text, trimmed)
    }
}

pub const CAPSULES: &[Capsule] = &[
    Capsule {
        id: 1,
        title: "¿Qué es la Ansiedad?",
        category: "Conceptos Básicos",
        excerpt: "La ansiedad es una respuesta natural del cuerpo ante situaciones de estrés...",
        content: "La ansiedad es una respuesta natural del cuerpo ante situaciones de estrés o peligro percibido. Es una emoción normal que todos experimentamos en ciertos momentos de nuestras vidas.

**Síntomas comunes:**
• Preocupación excesiva
• Nerviosismo o inquietud
• Tensión muscular
• Problemas para concentrarse
• Alteraciones del sueño

**¿Cuándo buscar ayuda?**
Si la ansiedad interfiere con tu vida diaria, trabajo o relaciones, es importante buscar apoyo profesional.

La ansiedad es tratable y hay muchas estrategias efectivas para manejarla.",
    },
    Capsule {
        id: 2,
        title: "Técnicas de Respiración",
        category: "Herramientas Prácticas",
        excerpt: "Aprende técnicas simples de respiración para manejar momentos de estrés...",
        content: "La respiración consciente es una de las herramientas más efectivas para manejar la ansiedad y el estrés.

**Técnica 4-7-8:**
1. Inhala por la nariz durante 4 segundos
2. Mantén la respiración por 7 segundos
3. Exhala por la boca durante 8 segundos
4. Repite 3-4 veces

**Respiración diafragmática:**
• Coloca una mano en el pecho y otra en el abdomen
• Respira lentamente por la nariz
• La mano del abdomen debe moverse más que la del pecho
• Exhala lentamente por la boca

**Beneficios:**
• Reduce la frecuencia cardíaca
• Disminuye la presión arterial
• Calma el sistema nervioso
• Aumenta la sensación de control",
    },
    Capsule {
        id: 3,
        title: "Autocuidado Diario",
        category: "Bienestar",
        excerpt: "Pequeñas acciones diarias que pueden mejorar significativamente tu salud mental...",
        content: "El autocuidado no es egoísta, es esencial para mantener un buen equilibrio emocional.

**Rutinas recomendadas:**
• Dormir 7-9 horas diarias
• Ejercicio regular (30 min al día)
• Alimentación balanceada
• Tiempo para hobbies y pasiones
• Conexión social significativa

**Autocuidado mental:**
• Practicar gratitud diariamente
• Establecer límites saludables
• Decir \"no\" cuando sea necesario
• Tomar descansos regulares
• Buscar ayuda cuando la necesites

El autocuidado es una inversión en tu bienestar, no un lujo.",
    },
    Capsule {
        id: 4,
        title: "Mindfulness y Atención Plena",
        category: "Prácticas Conscientes",
        excerpt: "Descubre cómo vivir el momento presente puede transformar tu bienestar...",
        content: "El mindfulness es la práctica de prestar atención al momento presente de manera intencional y sin juicio.

**¿Qué es mindfulness?**
Es estar completamente presente en el aquí y ahora, observando pensamientos y sensaciones sin reaccionar automáticamente.

**Beneficios comprobados:**
• Reduce el estrés y la ansiedad
• Mejora la concentración
• Aumenta la autoconciencia
• Fortalece la regulación emocional
• Mejora la calidad del sueño

**Cómo empezar:**
1. Dedica 5 minutos al día
2. Encuentra un lugar tranquilo
3. Observa tu respiración
4. Nota cuando tu mente divague
5. Regresa gentilmente al presente

Puedes practicar mindfulness en cualquier actividad: comer, caminar, ducharte. La clave es estar plenamente presente.",
    },
    Capsule {
        id: 5,
        title: "Manejo del Estrés",
        category: "Estrategias de Afrontamiento",
        excerpt: "Herramientas prácticas para identificar y manejar el estrés efectivamente...",
        content: "El estrés es inevitable, pero cómo lo manejamos hace toda la diferencia.

**Identifica tus estresores:**
• Situaciones laborales
• Relaciones personales
• Preocupaciones financieras
• Problemas de salud
• Cambios vitales importantes

**Estrategias efectivas:**
• Organización y planificación
• Técnicas de relajación
• Ejercicio regular
• Hablar con alguien de confianza
• Establecer prioridades claras

**Señales de alerta:**
• Irritabilidad constante
• Problemas de sueño
• Cambios en el apetito
• Dificultad para concentrarse
• Dolores físicos sin causa

Pedir ayuda profesional no es señal de debilidad, sino de fortaleza y autocuidado.",
    },
    Capsule {
        id: 6,
        title: "La Importancia del Sueño",
        category: "Salud Integral",
        excerpt: "El sueño es fundamental para la salud mental y el bienestar emocional...",
        content: "Un buen descanso es esencial para la salud mental y el funcionamiento óptimo del cerebro.

**¿Por qué es importante?**
• Consolida la memoria
• Regula las emociones
• Restaura energía física y mental
• Fortalece el sistema inmune
• Mejora la toma de decisiones

**Higiene del sueño:**
• Mantén horarios regulares
• Evita pantallas antes de dormir
• Crea un ambiente tranquilo y oscuro
• Temperatura confortable (18-22°C)
• Evita cafeína 6 horas antes

**Rutina relajante:**
1. Baño o ducha tibia
2. Lectura ligera
3. Meditación o respiración
4. Estiramientos suaves
5. Evitar preocupaciones

Meta: 7-9 horas de sueño de calidad cada noche para adultos.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("**Beneficios:**"), (LineKind::Heading, "Beneficios:"));
        assert_eq!(parse_line("• Calma"), (LineKind::Bullet, "Calma"));
        assert_eq!(parse_line("   "), (LineKind::Blank, ""));
        assert_eq!(parse_line("1. Inhala"), (LineKind::Text, "1. Inhala"));
    }

    #[test]
    fn test_every_capsule_has_a_heading() {
        for capsule in CAPSULES {
            let headings = capsule
                .content
                .lines()
                .filter(|l| parse_line(l).0 == LineKind::Heading)
                .count();
            assert!(headings > 0, "capsule {} has no headings", capsule.id);
        }
    }
}
