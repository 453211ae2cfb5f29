//! Console walkthrough of the toast lifecycle: shortcuts, capacity eviction,
//! the promise bridge, and manual dismissal. Prints each published snapshot
//! instead of drawing a TUI, so the sequence of states is easy to follow.
//!
//! Run with: `cargo run --example notify`

use crouton::promise::PromiseMessages;
use crouton::{notify, TextSpec, ToastRequest};
use std::time::Duration;

fn print_snapshot(label: &str, notifier: &crouton::Notifier) {
    println!("-- {label}");
    for toast in notifier.toasts() {
        let state = if toast.is_exiting() { "exiting" } else { "visible" };
        println!("   {} {}  [{state}]", toast.kind.icon(), toast.message);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let notifier = notify::initialize().expect("running inside the tokio runtime");

    notify::info("Connecting to server...");
    notify::success("Connected");
    notify::warning("Certificate expires in 3 days");
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_snapshot("after three shortcuts", notifier);

    // overflow past max_visible (5): the oldest visible toast gets evicted
    for i in 1..=4 {
        notify::show(ToastRequest::new(format!("background job {i} finished")));
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_snapshot("after overflow (oldest is exiting)", notifier);

    // bridge an async operation into loading -> success
    let report = notify::promise(
        async {
            tokio::time::sleep(Duration::from_millis(400)).await;
            Ok::<_, String>(128usize)
        },
        PromiseMessages::default()
            .loading("Generating report...")
            .success(TextSpec::derived(|rows: &usize| {
                format!("Report ready ({rows} rows)")
            }))
            .error("Report failed"),
    )
    .await;
    println!("promise returned: {report:?}");
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_snapshot("after the promise settled", notifier);

    // a manual-dismiss toast sticks around until dismissed
    let sticky = notify::show(ToastRequest::new("Press q to quit").duration(Duration::ZERO));
    tokio::time::sleep(Duration::from_secs(6)).await;
    print_snapshot("after auto-dismissals ran out", notifier);

    notify::dismiss(sticky);
    tokio::time::sleep(Duration::from_millis(400)).await;
    print_snapshot("after dismissing the sticky toast", notifier);
}
