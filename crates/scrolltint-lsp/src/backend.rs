//! LSP backend: document store, diagnostics, hover, and completion.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::analysis::{Context, completion_context, find_enclosing_element, text_before, word_at};
use crate::diagnostics::page_diagnostics;
use crate::knowledge::{AttrKind, ELEMENTS, attr_in_element, attrs_for, element_by_name};

pub struct Backend {
    client: Client,
    docs: Arc<RwLock<HashMap<Url, String>>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn update(&self, uri: Url, text: String) {
        let diagnostics = page_diagnostics(&text);
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, None)
            .await;
        self.docs.write().await.insert(uri, text);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![":".to_string(), "\n".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "scrolltint-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "scrolltint-lsp ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    // ── Document lifecycle ────────────────────────────────────────────────

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.update(params.text_document.uri, params.text_document.text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the last change holds the whole buffer.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.update(params.text_document.uri, change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.docs.write().await.remove(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    // ── Hover ─────────────────────────────────────────────────────────────

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = &params.text_document_position_params.position;

        let docs = self.docs.read().await;
        let Some(text) = docs.get(uri) else { return Ok(None) };
        Ok(hover_at(text, pos))
    }

    // ── Completion ────────────────────────────────────────────────────────

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let pos = &params.text_document_position.position;

        let docs = self.docs.read().await;
        let Some(text) = docs.get(uri) else { return Ok(None) };

        let items = match completion_context(text, pos) {
            Context::Element => element_items(),
            Context::Attribute { element } => attribute_items(&element),
            Context::Value { element, attr } => value_items(&element, &attr),
        };
        Ok(Some(CompletionResponse::Array(items)))
    }
}

fn hover_at(text: &str, pos: &Position) -> Option<Hover> {
    let word = word_at(text, pos)?;

    if let Some(el) = element_by_name(word) {
        return Some(markdown_hover(format!("**{}**\n\n{}", el.name, el.doc)));
    }

    let element = find_enclosing_element(&text_before(text, pos))?;
    let attr = attr_in_element(&element, word)?;
    Some(markdown_hover(format!(
        "**{}** · {}\n\n{}",
        attr.name,
        attr.kind.describe(),
        attr.doc
    )))
}

// ── Completion item builders ──────────────────────────────────────────────

fn first_line(doc: &str) -> String {
    doc.lines().next().unwrap_or("").to_string()
}

fn element_items() -> Vec<CompletionItem> {
    ELEMENTS
        .iter()
        .map(|e| {
            let mut item = CompletionItem::new_simple(e.name.to_string(), first_line(e.doc));
            item.kind = Some(CompletionItemKind::CLASS);
            item.insert_text = Some(format!("{} {{\n\t$0\n}}", e.name));
            item.insert_text_format = Some(InsertTextFormat::SNIPPET);
            item
        })
        .collect()
}

fn attribute_items(element: &str) -> Vec<CompletionItem> {
    attrs_for(element)
        .iter()
        .map(|a| {
            let mut item = CompletionItem::new_simple(a.name.to_string(), first_line(a.doc));
            item.kind = Some(CompletionItemKind::PROPERTY);
            item.insert_text = Some(format!("{}: $0", a.name));
            item.insert_text_format = Some(InsertTextFormat::SNIPPET);
            item
        })
        .collect()
}

fn value_items(element: &str, attr: &str) -> Vec<CompletionItem> {
    let Some(info) = attr_in_element(element, attr) else { return vec![] };

    let (label, detail, snippet, kind) = match info.kind {
        AttrKind::ColorPoint => (
            "\"R, G, B\"",
            "Color point, each component 0-255",
            "\"${1:255}, ${2:255}, ${3:255}\"",
            CompletionItemKind::COLOR,
        ),
        AttrKind::Color => ("#rrggbb", "Color literal", "#${1:000000}", CompletionItemKind::COLOR),
        AttrKind::Length | AttrKind::Name => return vec![],
    };

    let mut item = CompletionItem::new_simple(label.to_string(), detail.to_string());
    item.kind = Some(kind);
    item.insert_text = Some(snippet.to_string());
    item.insert_text_format = Some(InsertTextFormat::SNIPPET);
    vec![item]
}

fn markdown_hover(md: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: md,
        }),
        range: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover_text(src: &str, line: u32, character: u32) -> Option<String> {
        match hover_at(src, &Position { line, character })?.contents {
            HoverContents::Markup(m) => Some(m.value),
            _ => None,
        }
    }

    #[test]
    fn hovers_elements_and_attributes() {
        let src = "Page {\n  Section {\n    data-color-point: \"1,2,3\"\n  }\n}";
        assert!(hover_text(src, 1, 4).unwrap().starts_with("**Section**"));
        assert!(hover_text(src, 2, 10).unwrap().starts_with("**data-color-point**"));
        assert_eq!(hover_text(src, 2, 24), None);
    }

    #[test]
    fn color_point_value_completion_is_a_snippet() {
        let items = value_items("Section", "data-color-point");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].insert_text_format, Some(InsertTextFormat::SNIPPET));
        assert!(value_items("Section", "height").is_empty());
    }

    #[test]
    fn page_attributes_include_background() {
        let names: Vec<String> = attribute_items("Page").into_iter().map(|i| i.label).collect();
        assert!(names.contains(&"background".to_string()));
        assert!(names.contains(&"data-color-point".to_string()));
    }

    #[test]
    fn root_color_point_hovers_and_completes() {
        let src = "Page {\n  data-color-point: \"0,0,0\"\n}";
        assert!(hover_text(src, 1, 4).unwrap().starts_with("**data-color-point**"));
        assert_eq!(value_items("Page", "data-color-point").len(), 1);
    }
}
