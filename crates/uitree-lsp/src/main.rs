use tower_lsp::{LspService, Server};

mod analysis;
mod backend;

use backend::Backend;

#[tokio::main]
async fn main() {
    // stdout carries the protocol, so logs go to stderr only.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
