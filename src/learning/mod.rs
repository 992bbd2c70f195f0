//! 학습 콘텐츠: 학습 포인트, 커리큘럼, 레슨, 연습 문제
//!
//! 이름 분석 결과(`core::analyzer`)를 소비하여 학습자에게 보여줄 자료를 만든다.
//!
//! # 사용 예시
//!
//! ```
//! use hangul_lesson::analyze;
//! use hangul_lesson::learning::generate_learning_points;
//!
//! let points = generate_learning_points(&analyze("가렌", "Garen"), 3);
//! assert_eq!(points[0].title, "ㄱ at the start of a word");
//! ```

pub mod curriculum;
mod lessons;
mod points;
mod practice;

pub use curriculum::{
    curriculum, matches_focus, practice_count, stage, CurriculumStage, FocusArea, FocusKind,
    Level,
};
pub use lessons::{
    lesson_module, lesson_modules, lessons_for_stage, next_lesson, Lesson, LessonContent,
    LessonExample, LessonModule,
};
pub use points::{generate_learning_points, LearningPoint, PointKind};
pub use practice::{generate_practice_items, kinds_for_level, PracticeItem, PracticeKind};
