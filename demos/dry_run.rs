use soarflow::{LogEntry, PlaybookGraph, RunObserver, Simulator, SimulatorConfig, resolve_order};

struct PrintObserver;

impl RunObserver for PrintObserver {
    fn on_log(
        &self,
        entry: &LogEntry,
    ) {
        println!("[{:>7}] {} {}", entry.status.as_ref(), entry.node_name, entry.result.clone().unwrap_or_default());
    }
}

#[tokio::main]
async fn main() {
    let template = soarflow::catalog().iter().find(|t| t.id == "phishing_email_response").unwrap();
    let playbook = template.load().unwrap();

    let graph = PlaybookGraph::try_from(&playbook).unwrap();
    println!("{}\n", graph.schema());

    let order = resolve_order(&playbook).unwrap();
    let ids: Vec<&str> = order.iter().map(|n| n.id.as_str()).collect();
    println!("Run order: {}\n", ids.join(" -> "));

    let simulator = Simulator::new(SimulatorConfig {
        pending_hold_ms: 50,
        running_hold_ms: 80,
        true_branch_weight: 0.7,
    });
    let state = simulator.run(&playbook, &PrintObserver).await.unwrap();
    println!("\nRun finished: {}\n", state.as_ref());

    for target in soarflow::targets() {
        let export = soarflow::export(target.id, &playbook.name, &playbook);
        println!("{:<28} -> {} ({} bytes)", target.name, export.filename, export.content.len());
    }
}
