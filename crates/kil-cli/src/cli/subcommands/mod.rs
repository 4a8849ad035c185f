mod exam;

pub use exam::ExamCommands;
