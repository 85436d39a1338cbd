//! Portal Pages

mod student_dashboard;
mod teacher_portal;

pub use student_dashboard::StudentDashboard;
pub use teacher_portal::TeacherPortal;
