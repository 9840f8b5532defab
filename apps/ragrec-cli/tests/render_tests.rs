use std::io::Cursor;

use ragrec_cli::interactive::Session;
use ragrec_cli::render::{JsonRenderer, TerminalRenderer};
use ragrec_core::config::UiConfig;
use ragrec_core::traits::Renderer;
use ragrec_core::types::{Block, PageConfig};

fn page() -> PageConfig {
    PageConfig::new("RAG Recommender", "🔍")
}

fn terminal_text(blocks: &[Block]) -> String {
    let mut renderer = TerminalRenderer::new(Vec::new(), false);
    renderer.render_page(&page(), blocks).expect("render");
    String::from_utf8(renderer.into_inner()).expect("utf8")
}

#[test]
fn terminal_page_starts_with_banner() {
    let text = terminal_text(&[Block::heading("Result")]);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("🔍 RAG Recommender"));
    assert!(lines.next().unwrap().chars().all(|c| c == '='));
}

#[test]
fn terminal_key_values_and_plain_markdown() {
    let text = terminal_text(&[
        Block::key_values([("Model", "GPT-4")]),
        Block::markdown("Use **Cosine** here"),
    ]);
    assert!(text.contains("  - Model: `GPT-4`"));
    assert!(text.contains("Use Cosine here"), "emphasis markers removed without color");
    assert!(!text.contains('\x1b'));
}

#[test]
fn terminal_table_aligns_columns() {
    let text = terminal_text(&[ragrec_selector::reference::table_block()]);
    let header = text.lines().find(|l| l.starts_with("Metric")).expect("header row");
    let cosine = text.lines().find(|l| l.starts_with("Cosine")).expect("cosine row");
    assert_eq!(header.find('|'), cosine.find('|'), "first separator lines up");
    assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 6, "header plus five rows");
}

#[test]
fn banner_printed_once_per_page() {
    let mut renderer = TerminalRenderer::new(Vec::new(), false);
    renderer.render_page(&page(), &[Block::info("one")]).unwrap();
    renderer.render_page(&page(), &[Block::info("two")]).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text.matches("🔍 RAG Recommender").count(), 1);
    assert!(text.contains("│ one") && text.contains("│ two"));
}

#[test]
fn json_document_per_page() {
    let mut renderer = JsonRenderer::new(Vec::new());
    let blocks = ragrec_freetext::form::present("chatbot needing accuracy");
    renderer.render_page(&page(), &blocks).unwrap();

    let doc: serde_json::Value =
        serde_json::from_slice(&renderer.into_inner()).expect("valid json");
    assert_eq!(doc["page"]["title"], "RAG Recommender");
    let kv = doc["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["kind"] == "key_values")
        .expect("key/value block");
    assert_eq!(kv["entries"][0]["value"], "Qdrant");
    assert_eq!(kv["entries"][2]["value"], "OpenAI (text-embedding-3-small)");
}

#[test]
fn json_finish_without_begin_is_an_error() {
    let mut renderer = JsonRenderer::new(Vec::new());
    assert!(renderer.finish().is_err());
}

fn run_session(script: &str) -> (String, serde_json::Value) {
    let ui = UiConfig::default();
    let mut renderer = JsonRenderer::new(Vec::new());
    let mut prompts = Vec::new();
    Session::new(Cursor::new(script.to_string()), &mut prompts, &mut renderer, &ui)
        .run()
        .expect("session");

    let out = renderer.into_inner();
    let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&out)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .expect("json stream");
    (String::from_utf8(prompts).unwrap(), serde_json::Value::Array(docs))
}

#[test]
fn session_describes_selects_and_quits() {
    let (prompts, docs) =
        run_session("Offline PDF search\n/select\n1\nElasticsearch\n\n/quit\nignored\n");
    let docs = docs.as_array().unwrap();
    assert_eq!(docs.len(), 2);

    let describe = &docs[0]["blocks"][1]["entries"];
    assert_eq!(describe[2]["value"], "MiniLM or SBERT");

    let select = &docs[1]["blocks"][1]["entries"];
    assert_eq!(select[0]["value"], "LLaMA 3");
    assert_eq!(select[2]["value"], "Cosine", "blank answer takes the first option");
    assert!(prompts.contains("Goodbye"));
}

#[test]
fn session_warns_on_blank_description_and_unknown_command() {
    let (prompts, docs) = run_session("   \n/bogus\n");
    let docs = docs.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["blocks"][0]["kind"], "warning");
    assert!(prompts.contains("Unknown command: /bogus"));
}

#[test]
fn session_reprompts_on_bad_choice_and_stops_at_eof() {
    let (prompts, docs) = run_session("/select\n9\n");
    assert!(prompts.contains("Enter 1-5"));
    assert!(docs.as_array().unwrap().is_empty(), "nothing rendered when input ends mid-selection");
}
