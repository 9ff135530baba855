use gossip_cluster::protocol::ProtocolConfig;
use gossip_cluster::sim::SimCluster;

#[derive(Debug, Clone, Copy)]
struct RunOptions {
    nodes: usize,
    cycles: u64,
    seed: u64,
    loss: f64,
    timeout: i64,
    fail_node: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!(
            "Usage: {} [--nodes <n>] [--cycles <n>] [--seed <n>] [--loss <p>] [--timeout <n>] [--fail <node>]",
            args[0]
        );
        eprintln!("Example: {} --nodes 5 --cycles 50", args[0]);
        eprintln!("Example: {} --nodes 5 --cycles 50 --loss 0.2 --fail 3", args[0]);
        std::process::exit(1);
    }

    let mut opts = RunOptions {
        nodes: 5,
        cycles: 50,
        seed: 1,
        loss: 0.0,
        timeout: 2,
        fail_node: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" => {
                opts.nodes = args[i + 1].parse()?;
                i += 2;
            }
            "--cycles" => {
                opts.cycles = args[i + 1].parse()?;
                i += 2;
            }
            "--seed" => {
                opts.seed = args[i + 1].parse()?;
                i += 2;
            }
            "--loss" => {
                opts.loss = args[i + 1].parse()?;
                i += 2;
            }
            "--timeout" => {
                opts.timeout = args[i + 1].parse()?;
                i += 2;
            }
            "--fail" => {
                opts.fail_node = Some(args[i + 1].parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!(
        "Simulating {} nodes for {} cycles (seed={}, loss={})",
        opts.nodes,
        opts.cycles,
        opts.seed,
        opts.loss
    );

    let config = ProtocolConfig {
        failure_timeout: opts.timeout,
        ..ProtocolConfig::default()
    };

    let mut cluster = SimCluster::new(opts.nodes, config, opts.seed, opts.loss)?;
    cluster.start_all();

    match opts.fail_node {
        // Kill the chosen node (1-based) halfway through, so the report shows
        // the survivors evicting it.
        Some(victim) if victim >= 1 && victim <= opts.nodes => {
            let half = opts.cycles / 2;
            cluster.run(half);
            tracing::info!("Failing node {} at cycle {}", victim, cluster.time());
            cluster.fail_node(victim - 1);
            cluster.run(opts.cycles - half);
        }
        Some(victim) => {
            anyhow::bail!("--fail {} is out of range (1..={})", victim, opts.nodes);
        }
        None => {
            cluster.run(opts.cycles);
        }
    }

    let net = &cluster.network;
    tracing::info!(
        "Done: {} packets sent, {} delivered, {} dropped",
        net.sent,
        net.delivered,
        net.dropped
    );

    println!("{}", serde_json::to_string_pretty(&cluster.summary())?);

    Ok(())
}
