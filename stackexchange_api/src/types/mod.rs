mod user;
pub use self::user::{ShallowUser, UserID, UserType};

mod question;
pub use self::question::{Question, QuestionID};

mod answer;
pub use self::answer::{Answer, AnswerID};

mod comment;
pub use self::comment::{Comment, CommentID};
