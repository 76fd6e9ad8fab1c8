use chrono::{DateTime, Utc};
use serde::Serialize;
use stackexchange_api::types::{Answer, Comment, Question, ShallowUser};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct QuestionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Answers")]
    answers: String,
    #[tabled(rename = "Views")]
    views: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

#[derive(Tabled)]
struct AnswerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Question")]
    question_id: i64,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Accepted")]
    accepted: String,
    #[tabled(rename = "Author")]
    author: String,
}

#[derive(Tabled)]
struct CommentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Post")]
    post_id: i64,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Author")]
    author: String,
}

// -- Row builders --

fn build_question_rows(questions: &[Question]) -> Vec<QuestionRow> {
    questions
        .iter()
        .map(|q| QuestionRow {
            id: q.question_id,
            created: format_date(q.creation_date),
            score: q.score,
            answers: if q.has_accepted_answer() {
                format!("{} ✓", q.answer_count)
            } else {
                q.answer_count.to_string()
            },
            views: q.view_count,
            title: truncate(&q.title, 60),
            tags: q.tags.join(", "),
        })
        .collect()
}

fn build_answer_rows(answers: &[Answer]) -> Vec<AnswerRow> {
    answers
        .iter()
        .map(|a| AnswerRow {
            id: a.answer_id,
            question_id: a.question_id,
            created: format_date(a.creation_date),
            score: a.score,
            accepted: if a.is_accepted { "yes" } else { "" }.to_string(),
            author: author_name(a.owner.as_ref()),
        })
        .collect()
}

fn build_comment_rows(comments: &[Comment]) -> Vec<CommentRow> {
    comments
        .iter()
        .map(|c| CommentRow {
            id: c.comment_id,
            post_id: c.post_id,
            created: format_date(c.creation_date),
            score: c.score,
            author: author_name(c.owner.as_ref()),
        })
        .collect()
}

// -- Table output --

pub fn print_questions_table(questions: &[Question]) {
    println!("{}", Table::new(build_question_rows(questions)));
}

pub fn print_answers_table(answers: &[Answer]) {
    println!("{}", Table::new(build_answer_rows(answers)));
}

pub fn print_comments_table(comments: &[Comment]) {
    println!("{}", Table::new(build_comment_rows(comments)));
}

// -- JSON output --

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn author_name(owner: Option<&ShallowUser>) -> String {
    owner
        .and_then(|o| o.display_name.clone())
        .unwrap_or_else(|| "(unknown)".to_string())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
