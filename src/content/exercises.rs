//! Guided relaxation exercise catalog

use crate::exercise::{Exercise, ExerciseStep};
use crate::{Result, SaludMenteError};

fn exercise(
    id: u32,
    title: &str,
    description: &str,
    total_duration_label: &str,
    icon: &str,
    steps: &[(&str, u32)],
) -> Exercise {
    Exercise {
        id,
        title: title.to_string(),
        description: description.to_string(),
        total_duration_label: total_duration_label.to_string(),
        icon: icon.to_string(),
        steps: steps
            .iter()
            .map(|(text, secs)| ExerciseStep::new(*text, *secs))
            .collect(),
    }
}

/// All guided exercises, in display order
pub fn catalog() -> Vec<Exercise> {
    vec![
        exercise(
            1,
            "Respiración 4-7-8",
            "Técnica de respiración para relajación profunda",
            "5 minutos",
            "🫁",
            &[
                ("Siéntate cómodamente con la espalda recta", 5),
                ("Inhala por la nariz durante 4 segundos", 4),
                ("Retén la respiración por 7 segundos", 7),
                ("Exhala por la boca durante 8 segundos", 8),
                ("Repite el ciclo 4 veces más", 76),
                ("¡Excelente! Has completado el ejercicio", 5),
            ],
        ),
        exercise(
            2,
            "Relajación Progresiva",
            "Libera la tensión de todo tu cuerpo",
            "8 minutos",
            "🧘",
            &[
                ("Acuéstate o siéntate cómodamente", 10),
                ("Cierra los ojos y respira profundamente", 10),
                ("Tensa los músculos de los pies por 5 segundos, luego relaja", 15),
                ("Tensa las pantorrillas, luego relaja completamente", 15),
                ("Continúa con los muslos, tensiona y relaja", 15),
                ("Tensa el abdomen, mantén y luego relaja", 15),
                ("Tensa los brazos y hombros, luego libera la tensión", 15),
                ("Finalmente, tensa el rostro y luego relájalo completamente", 15),
                ("Respira profundamente y disfruta la relajación total", 20),
                ("¡Perfecto! Tu cuerpo está completamente relajado", 5),
            ],
        ),
        exercise(
            3,
            "Mindfulness Básico",
            "Conecta con el momento presente",
            "10 minutos",
            "🌸",
            &[
                ("Encuentra una posición cómoda", 10),
                ("Cierra los ojos suavemente", 5),
                ("Observa tu respiración natural sin cambiarla", 60),
                ("Nota las sensaciones en tu cuerpo", 60),
                ("Escucha los sonidos a tu alrededor sin juzgar", 60),
                ("Si tu mente divaga, regresa gentilmente a la respiración", 120),
                ("Mantén esta atención plena por unos minutos más", 180),
                ("Lentamente abre los ojos cuando estés listo", 10),
                ("¡Excelente práctica de mindfulness!", 5),
            ],
        ),
        exercise(
            4,
            "Visualización Guiada",
            "Imagina un lugar de paz y tranquilidad",
            "6 minutos",
            "🏞",
            &[
                ("Cierra los ojos y respira profundamente", 10),
                ("Imagina que estás en una hermosa playa tropical", 30),
                ("Siente la arena cálida bajo tus pies", 30),
                ("Escucha el sonido relajante de las olas", 30),
                ("Siente la brisa suave en tu rostro", 30),
                ("Observa el hermoso atardecer en el horizonte", 60),
                ("Respira la paz y tranquilidad de este lugar", 60),
                ("Lleva esta sensación de calma contigo", 30),
                ("Cuando estés listo, regresa al presente", 10),
                ("¡Hermosa visualización completada!", 5),
            ],
        ),
        exercise(
            5,
            "Escaneo Corporal",
            "Consciencia corporal completa",
            "7 minutos",
            "✨",
            &[
                ("Recuéstate cómodamente", 10),
                ("Cierra los ojos y respira naturalmente", 10),
                ("Lleva tu atención a tus pies", 30),
                ("Sube lentamente hacia tus tobillos y pantorrillas", 40),
                ("Continúa hacia tus rodillas y muslos", 40),
                ("Observa tu abdomen y pecho", 40),
                ("Nota las sensaciones en tus manos y brazos", 40),
                ("Lleva la atención a tu cuello y hombros", 40),
                ("Finalmente, observa tu cabeza y rostro", 40),
                ("Siente tu cuerpo como un todo", 60),
                ("¡Excelente escaneo corporal!", 5),
            ],
        ),
    ]
}

/// Look up an exercise by id
pub fn find(id: u32) -> Result<Exercise> {
    catalog()
        .into_iter()
        .find(|ex| ex.id == id)
        .ok_or_else(|| SaludMenteError::NotFound(format!("ejercicio {}", id)))
}
