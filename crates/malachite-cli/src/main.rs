//! malachite CLI
//!
//! Grows and inspects a knowledge crystal kept in a JSON snapshot file.
//!
//! Usage:
//!   malachite demo
//!   malachite seeds
//!   malachite crystallize <parent> <mutation> <text>
//!   malachite void <parent> <description>
//!   malachite trace <id>
//!   malachite sector <earth|water|sky>

mod command;
mod render;

use command::{parse, print_usage, snapshot_path, Command};
use malachite_store::{Malachite, Node, NodeType, StoreConfig};
use render::{render_listing, render_ray};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Open the crystal at `path`, or plant a fresh one if the file is absent.
fn open(path: &Path, config: StoreConfig) -> malachite_store::Result<Malachite> {
    let builder = Malachite::builder().config(config);
    if path.exists() {
        builder.load(path)
    } else {
        tracing::info!(path = %path.display(), "no snapshot found, planting a new crystal");
        Ok(builder.build())
    }
}

/// The wheel evolution: from the Log to the Motor-Wheel, through a dark age.
fn demo(config: StoreConfig) -> malachite_store::Result<()> {
    let mut db = Malachite::builder().config(config).build();

    println!("=== MALACHITE: EVOLUTION SIMULATION ===\n");

    let sledge = db.crystallize("The Sledge (Separating load from mover)", "SEED_LOG", 0.2)?;
    let wheel = db.crystallize("Solid Disc Wheel + Axle", &sledge, 0.8)?;
    let spoke = db.crystallize("Spoked Wheel (Chariot)", &wheel, 0.5)?;
    let void = db.create_void(&spoke, "High-precision bronze casting lost")?;
    let iron = db.crystallize("Iron Rim Wheel (Carriage)", &void, 0.3)?;
    let motor = db.crystallize("Motor-Wheel (Tesla)", &iron, 0.9)?;

    if let Some(leaf) = db.get(&motor) {
        println!("Evolutionary Path for: {}", leaf.content);
    }
    print!("{}", render_ray(&db.trace_ray(&motor)));

    // A write with no lineage is noise and must be refused.
    if let Err(e) = db.crystallize("DESTROY EVERYTHING", "VOID_OF_NOTHING", 1.0) {
        println!("\nRejected: {}", e);
    }
    Ok(())
}

fn run(cmd: Command) -> malachite_store::Result<()> {
    let config = StoreConfig::from_env();
    let path = snapshot_path();

    match cmd {
        Command::Demo => demo(config)?,
        Command::Help => print_usage(),
        Command::Seeds => {
            let db = open(&path, config)?;
            let seeds: Vec<&Node> = db
                .store()
                .nodes()
                .filter(|n| n.node_type == NodeType::Seed)
                .collect();
            print!("{}", render_listing(&seeds));
        }
        Command::Crystallize {
            parent_id,
            mutation_degree,
            content,
        } => {
            let mut db = open(&path, config)?;
            let id = db.crystallize(content, &parent_id, mutation_degree)?;
            db.save_snapshot(&path)?;
            println!("{}", id);
        }
        Command::Void {
            parent_id,
            description,
        } => {
            let mut db = open(&path, config)?;
            let id = db.create_void(&parent_id, &description)?;
            db.save_snapshot(&path)?;
            println!("{}", id);
        }
        Command::Trace { node_id } => {
            let db = open(&path, config)?;
            let ray = db.trace_ray(&node_id);
            if ray.is_empty() {
                println!("(no such node: {})", node_id);
            } else {
                print!("{}", render_ray(&ray));
            }
        }
        Command::Sector { sector } => {
            let db = open(&path, config)?;
            let nodes = db.scan_sector(sector);
            if nodes.is_empty() {
                println!("(none)");
            } else {
                print!("{}", render_listing(&nodes));
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "malachite=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match parse(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cmd) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
