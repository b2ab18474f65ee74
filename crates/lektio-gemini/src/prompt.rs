//! Lesson-plan prompt construction.
//!
//! The prompt fixes the output grammar the renderer consumes: session
//! headings as `**Session N: … (60 mins)**` lines, one pipe-delimited
//! table per session, and a total-session footer. If the input turns out
//! not to contain syllabus details, the model is told to answer in plain
//! prose instead — the renderer handles that as plain paragraphs.

/// Build the full prompt for one syllabus query.
pub fn build_lesson_plan_prompt(syllabus: &str) -> String {
    format!(
        "You are a helpful assistant whose job is to:-\n\
         Generate a detailed lesson plan for the following syllabus details:\n\
         If the input contains just some message and doesn't contain any syllabus information reply accordingly.\n\
         Input:\n\
         \n\
         {syllabus}\n\
         \n\
         Output format:\n\
         \n\
         The output should have a structure like below. The structure below is just an example. \
         And the number of sessions must be equal to the number of hours from the query above:\n\
         Each session should have the following format : **Session 3: History of Artificial Intelligence (60 mins)**\n\
         \n\
         | **Development of Lesson Plan**| **Teaching Aids** | **Time** |\n\
         |---|---|---|\n\
         | **Early AI Research and Developments** |  Projector - PPT presentation | 10 mins |\n\
         | **The Golden Age of AI and its Challenges** |  Projector - PPT presentation | 10 mins |\n\
         | **The AI Winter and its Aftermath** | Projector - PPT presentation | 10 mins |\n\
         | **The Rise of Modern AI: Machine Learning and Deep Learning** |  Projector - PPT presentation | 15 mins |\n\
         | **Summary and Evaluation** |  Board | 5 mins |\n\
         | **Home Assignment and Follow Up** |    | 5 mins |\n\
         | **Preparation for Next Lecture** |    |  |\n\
         \n\
         TOTAL NUMBER OF SESSIONS FOR THIS UNIT: 07.\n"
    )
}
