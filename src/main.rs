use relay::config::Config;
use relay::server::Server;
use relay::{Application, Next, Request, Response};
use tracing::info;

fn middleware1(_req: &Request, res: &mut Response, next: &mut Next<'_>) {
    info!("middleware1 start");
    next.proceed(res);
    info!("middleware1 end");
}

fn middleware2(_req: &Request, res: &mut Response, next: &mut Next<'_>) {
    info!("middleware2 start");
    res.end("main");
    next.proceed(res);
    info!("middleware2 end");
}

fn api(_req: &Request, res: &mut Response, next: &mut Next<'_>) {
    info!("api start");
    res.end("api");
    next.proceed(res);
    info!("api end");
}

fn test_route(_req: &Request, res: &mut Response, next: &mut Next<'_>) {
    info!("test start");
    res.end("test");
    next.proceed(res);
    info!("test end");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut app = Application::new();
    app.use_middleware(middleware1)
        .use_middleware(middleware2)
        .use_at("/api", api)
        .use_at("/test", test_route);

    let server = Server::from_config(app, &cfg.server).await?;
    info!("App is listening at {}", server.local_addr()?);

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shutdown.shutdown();
        }
    });

    server.run().await
}
