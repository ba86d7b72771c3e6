use quizlink_core::{Question, QuestionRecord, QuestionSlot, Quiz, QuizLink, Table, TableRow};

fn sample_record() -> QuestionRecord {
    QuestionRecord::new("O que sobe mas nunca desce?", "Idade", "Temperatura", "Balão", "Pressão")
}

#[test]
fn test_question_slot_json_is_flat() {
    let slot = QuestionSlot {
        link_id: 4,
        content: sample_record(),
    };

    let json = serde_json::to_value(&slot).unwrap();

    assert_eq!(json["link_id"], 4);
    assert_eq!(json["question"], "O que sobe mas nunca desce?");
    assert_eq!(json["answer"], "Idade");
    assert_eq!(json["wrong3"], "Pressão");
    assert!(json.get("content").is_none());
}

#[test]
fn test_options_put_answer_first() {
    let record = sample_record();
    assert_eq!(
        record.options(),
        ["Idade", "Temperatura", "Balão", "Pressão"]
    );
}

#[test]
fn test_table_rows_render_as_tuples() {
    let quiz = TableRow::Quiz(Quiz::new(1, "Own game"));
    assert_eq!(quiz.to_string(), "(1, \"Own game\")");
    assert_eq!(quiz.table(), Table::Quiz);

    let link = TableRow::QuizContent(QuizLink {
        id: 7,
        quiz_id: 1,
        question_id: 3,
    });
    assert_eq!(link.to_string(), "(7, 1, 3)");
    assert_eq!(link.id(), 7);

    let question = TableRow::Question(Question::new(2, sample_record()));
    assert!(question.to_string().starts_with("(2, \"O que sobe"));
}

#[test]
fn test_table_row_json_is_tagged_by_table() {
    let row = TableRow::QuizContent(QuizLink {
        id: 1,
        quiz_id: 2,
        question_id: 3,
    });

    let json = serde_json::to_value(&row).unwrap();

    assert_eq!(json["table"], "quiz_content");
    assert_eq!(json["question_id"], 3);
}
