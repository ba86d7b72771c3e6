pub mod link;
pub mod question;
pub mod quiz;
pub mod table;

pub use link::{QuestionSlot, QuizLink};
pub use question::{Question, QuestionRecord};
pub use quiz::Quiz;
pub use table::{Table, TableRow};
