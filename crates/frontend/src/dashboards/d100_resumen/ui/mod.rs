mod dashboard;

pub use dashboard::InicioDashboard;
