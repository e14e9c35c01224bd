//! Self-care routine catalog

/// A daily self-care habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub time_label: &'static str,
    pub icon: &'static str,
}

pub const ROUTINES: &[Routine] = &[
    Routine {
        id: 1,
        title: "Meditación matutina",
        description: "10 minutos de meditación al despertar",
        category: "Mindfulness",
        time_label: "10 min",
        icon: "🧘",
    },
    Routine {
        id: 2,
        title: "Ejercicio físico",
        description: "Actividad física por al menos 30 minutos",
        category: "Salud Física",
        time_label: "30 min",
        icon: "🏃",
    },
    Routine {
        id: 3,
        title: "Gratitud diaria",
        description: "Escribir 3 cosas por las que estoy agradecido",
        category: "Bienestar Emocional",
        time_label: "5 min",
        icon: "🙏",
    },
    Routine {
        id: 4,
        title: "Lectura relajante",
        description: "Leer un libro o artículo inspirador",
        category: "Crecimiento Personal",
        time_label: "20 min",
        icon: "📚",
    },
    Routine {
        id: 5,
        title: "Conexión social",
        description: "Llamar o escribir a un ser querido",
        category: "Relaciones",
        time_label: "15 min",
        icon: "💬",
    },
    Routine {
        id: 6,
        title: "Tiempo sin pantallas",
        description: "Desconectarse de dispositivos por 1 hora",
        category: "Descanso Mental",
        time_label: "60 min",
        icon: "📵",
    },
    Routine {
        id: 7,
        title: "Respiración profunda",
        description: "Ejercicios de respiración antes de dormir",
        category: "Relajación",
        time_label: "10 min",
        icon: "🌬",
    },
    Routine {
        id: 8,
        title: "Organizar espacio",
        description: "Mantener ordenado mi espacio personal",
        category: "Ambiente",
        time_label: "15 min",
        icon: "🏠",
    },
];
