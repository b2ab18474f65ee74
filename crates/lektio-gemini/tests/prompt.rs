use lektio_gemini::prompt::build_lesson_plan_prompt;

#[test]
fn prompt_embeds_the_syllabus_verbatim() {
    let prompt = build_lesson_plan_prompt("Unit 3: History of AI, 7 hours");
    assert!(prompt.contains("Unit 3: History of AI, 7 hours"));
}

#[test]
fn prompt_fixes_the_session_heading_format() {
    let prompt = build_lesson_plan_prompt("anything");
    assert!(prompt.contains("**Session 3: History of Artificial Intelligence (60 mins)**"));
}

#[test]
fn prompt_example_table_is_in_the_pipe_grammar() {
    let prompt = build_lesson_plan_prompt("anything");
    assert!(prompt.contains("| **Development of Lesson Plan**| **Teaching Aids** | **Time** |"));
    assert!(prompt.contains("|---|---|---|"));
    assert!(prompt.contains("TOTAL NUMBER OF SESSIONS FOR THIS UNIT"));
}
