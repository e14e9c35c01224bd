//! Static catalog content
//!
//! Guided exercises, educational capsules, self-care routines and
//! notifications shown by the screens. All of it is read-only.

pub mod capsules;
pub mod exercises;
pub mod notifications;
pub mod routines;

pub use capsules::Capsule;
pub use notifications::{Notification, NotificationKind};
pub use routines::Routine;

/// Breathing tip shown on the home screen
pub const BREATHING_TIP: &str = "Recuerda: la respiración profunda puede reducir el estrés en solo \
5 minutos. Inhala durante 4 segundos, mantén durante 4, y exhala durante 6.";

/// Footer line of the side menu
pub const MOTTO: &str = "Cuida tu mente, cuida tu vida";
