use lektio_export::{DocumentStyles, ExportError, generate_pdf, render_to_file};

const SAMPLE_PLAN: &str = "\
**Session 1: History of Artificial Intelligence (60 mins)**
| **Development of Lesson Plan** | **Teaching Aids** | **Time** |
|---|---|---|
| Early AI Research | Projector - PPT presentation | 10 mins |
| The AI Winter | Projector - PPT presentation | 15 mins |
| Summary and Evaluation | Board | 5 mins |
* Home assignment: read chapter 2
Total sessions for this unit: 1.";

fn render(text: &str) -> Vec<u8> {
    generate_pdf(text, &DocumentStyles::default()).expect("render should succeed")
}

#[test]
fn output_is_a_pdf() {
    let bytes = render(SAMPLE_PLAN);
    assert!(bytes.starts_with(b"%PDF-1.7"));
}

#[test]
fn identical_input_renders_byte_identical_artifacts() {
    assert_eq!(render(SAMPLE_PLAN), render(SAMPLE_PLAN));
}

#[test]
fn empty_input_still_produces_a_one_page_document() {
    let bytes = render("");
    let document = lopdf::Document::load_mem(&bytes).expect("output should parse");
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn long_input_flows_onto_multiple_pages() {
    let text = "A line of lesson plan prose.\n".repeat(120);
    let bytes = render(&text);
    let document = lopdf::Document::load_mem(&bytes).expect("output should parse");
    assert!(document.get_pages().len() > 1, "expected page overflow");
}

#[test]
fn page_content_carries_the_text() {
    let bytes = render(SAMPLE_PLAN);
    let document = lopdf::Document::load_mem(&bytes).expect("output should parse");
    let (_, first_page) = document
        .get_pages()
        .into_iter()
        .next()
        .expect("one page");
    let content = document
        .get_page_content(first_page)
        .expect("page content");
    let content = String::from_utf8_lossy(&content);
    assert!(content.contains("Home assignment: read chapter 2"));
    assert!(content.contains("Early AI Research"));
}

#[test]
fn inconsistent_table_columns_is_an_explicit_error() {
    let err = generate_pdf("|A|B|\n|---|---|\n|1|2|3|", &DocumentStyles::default())
        .expect_err("mismatched columns must fail");
    assert!(
        matches!(
            err,
            ExportError::MalformedTable {
                row: 1,
                expected: 2,
                found: 3,
            }
        ),
        "{err}"
    );
}

#[test]
fn render_to_file_writes_the_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lesson_plan.pdf");
    render_to_file(SAMPLE_PLAN, &DocumentStyles::default(), &path).expect("render");
    let bytes = std::fs::read(&path).expect("read back");
    assert!(bytes.starts_with(b"%PDF-1.7"));
}

#[test]
fn failed_render_leaves_no_partial_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lesson_plan.pdf");
    let result = render_to_file("|A|B|\n|1|2|3|", &DocumentStyles::default(), &path);
    assert!(result.is_err());
    assert!(!path.exists(), "destination must stay untouched on failure");
}
