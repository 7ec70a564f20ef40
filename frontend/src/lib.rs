pub mod config;
pub mod content;
pub mod format;
pub mod motion;
pub mod theme;
pub mod count_up {
    pub mod animator;
    pub mod clock;
    pub mod easing;
    pub mod hook;
    pub mod scheduler;
    pub mod session;
}
