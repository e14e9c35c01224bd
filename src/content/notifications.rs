//! Notification feed

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Reminder,
    Education,
    Achievement,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Reminder => "🔔",
            NotificationKind::Education => "🎓",
            NotificationKind::Achievement => "🏆",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Reminder => Color::Yellow,
            NotificationKind::Education => Color::Cyan,
            NotificationKind::Achievement => Color::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time_label: &'static str,
    pub kind: NotificationKind,
    pub read: bool,
}

pub const NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: 1,
        title: "Recordatorio de Diario",
        message: "Es un buen momento para escribir en tu diario emocional",
        time_label: "2 horas atrás",
        kind: NotificationKind::Reminder,
        read: false,
    },
    Notification {
        id: 2,
        title: "Nueva Cápsula Educativa",
        message: "Descubre técnicas de relajación para reducir la ansiedad",
        time_label: "1 día atrás",
        kind: NotificationKind::Education,
        read: true,
    },
    Notification {
        id: 3,
        title: "Rutina Completada",
        message: "¡Felicitaciones! Has completado tu rutina de autocuidado",
        time_label: "2 días atrás",
        kind: NotificationKind::Achievement,
        read: true,
    },
];

/// Number of notifications not yet read
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_count(NOTIFICATIONS), 1);
        assert_eq!(unread_count(&[]), 0);
    }
}
