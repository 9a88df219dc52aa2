//! 分類比對模組：徽章產生

pub mod badge;

pub use badge::BadgeGenerator;
