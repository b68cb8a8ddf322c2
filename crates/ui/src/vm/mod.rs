mod chart_vm;
mod quiz_vm;
mod time_fmt;

pub use chart_vm::{ChartSliceVm, ChartVm, map_chart};
pub use quiz_vm::{AnswerRowVm, FeedbackVm, QuestionCardVm, QuizIntent, QuizVm, ResultsVm};
pub use time_fmt::format_elapsed;
