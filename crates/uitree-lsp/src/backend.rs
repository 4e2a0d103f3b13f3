//! LSP backend: document store, diagnostics, hover, and document symbols.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::analysis::{document_symbols, hover_markdown, node_at, offset_to_position, position_to_offset, word_at};

// ── Backend ───────────────────────────────────────────────────────────────────

/// Open documents keyed by URI, holding the latest full text.
type DocumentStore = Arc<RwLock<HashMap<Url, String>>>;

pub struct Backend {
    client: Client,
    docs: DocumentStore,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self { client, docs: DocumentStore::default() }
    }

    /// Re-parse `text`, keep it as the latest version, and publish its diagnostics.
    async fn refresh(&self, uri: Url, version: i32, text: String) {
        let diagnostics = parse_diagnostics(&text);
        log::debug!("{} v{}: {} diagnostic(s)", uri, version, diagnostics.len());
        self.docs.write().await.insert(uri.clone(), text);
        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

// ── LanguageServer impl ───────────────────────────────────────────────────────

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            document_symbol_provider: Some(OneOf::Left(true)),
            ..Default::default()
        };
        let server_info = ServerInfo {
            name: "uitree-lsp".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        };
        Ok(InitializeResult { capabilities, server_info: Some(server_info) })
    }

    async fn initialized(&self, _params: InitializedParams) {
        log::info!("uitree-lsp initialized");
        self.client
            .log_message(MessageType::INFO, "uitree-lsp ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        log::info!("uitree-lsp shutting down");
        Ok(())
    }

    // ── Text synchronization ──────────────────────────────────────────────────

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.refresh(doc.uri, doc.version, doc.text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the whole document.
        let doc = params.text_document;
        if let Some(change) = params.content_changes.into_iter().next_back() {
            self.refresh(doc.uri, doc.version, change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.docs.write().await.remove(&uri);
        // Closed documents should not keep stale squiggles.
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    // ── Hover ─────────────────────────────────────────────────────────────────

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = &params.text_document_position_params.position;

        let docs = self.docs.read().await;
        let text = match docs.get(uri) {
            Some(t) => t,
            None => return Ok(None),
        };

        // Only hover over words; whitespace and punctuation stay silent.
        if word_at(text, pos).is_none() {
            return Ok(None);
        }

        let nodes = match uitree_markup::parse_str(text) {
            Ok(nodes) => nodes,
            Err(_) => return Ok(None),
        };
        let offset = position_to_offset(text, pos);
        Ok(node_at(&nodes, offset).map(|node| markdown_hover(hover_markdown(node))))
    }

    // ── Document symbols ──────────────────────────────────────────────────────

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let docs = self.docs.read().await;
        let text = match docs.get(&params.text_document.uri) {
            Some(t) => t,
            None => return Ok(None),
        };

        let symbols = match uitree_markup::parse_str(text) {
            Ok(nodes) => document_symbols(text, &nodes),
            Err(_) => vec![],
        };
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

pub fn parse_diagnostics(text: &str) -> Vec<Diagnostic> {
    match uitree_markup::parse_str(text) {
        Ok(_) => vec![],
        Err(e) => {
            // Highlight the offending character; at end of input the range is empty.
            let start = offset_to_position(text, e.offset);
            let end = if e.offset < text.chars().count() {
                offset_to_position(text, e.offset + 1)
            } else {
                start
            };
            vec![Diagnostic {
                range: Range { start, end },
                severity: Some(DiagnosticSeverity::ERROR),
                source: Some("uitree-lsp".to_string()),
                message: e.message.clone(),
                ..Default::default()
            }]
        }
    }
}

// ── Misc helpers ──────────────────────────────────────────────────────────────

fn markdown_hover(md: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: md,
        }),
        range: None,
    }
}
