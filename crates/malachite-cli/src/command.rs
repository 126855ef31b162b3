//! Command-line parsing.

use malachite_store::Sector;
use std::path::PathBuf;

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Demo,
    Seeds,
    Crystallize {
        parent_id: String,
        mutation_degree: f64,
        content: String,
    },
    Void {
        parent_id: String,
        description: String,
    },
    Trace {
        node_id: String,
    },
    Sector {
        sector: Sector,
    },
    Help,
}

pub fn print_usage() {
    eprintln!("malachite - Topological knowledge crystal");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  malachite demo                                   Run the wheel evolution");
    eprintln!("  malachite seeds                                  List the six axioms");
    eprintln!("  malachite crystallize <parent> <mutation> <text> Add a layer");
    eprintln!("  malachite void <parent> <description>            Record lost knowledge");
    eprintln!("  malachite trace <id>                             Show the ray to a node");
    eprintln!("  malachite sector <earth|water|sky>               List nodes in a sector");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MALACHITE_SNAPSHOT      Crystal file (default: ./malachite.json)");
    eprintln!("  MALACHITE_JITTER_BOUND  Max angular drift in degrees (default: 10)");
    eprintln!("  MALACHITE_JITTER_SEED   Seed for reproducible drift");
    eprintln!("  RUST_LOG                Log filter (default: malachite=info)");
}

/// Where the crystal lives between invocations.
pub fn snapshot_path() -> PathBuf {
    std::env::var("MALACHITE_SNAPSHOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./malachite.json"))
}

/// Parse arguments (without the program name).
pub fn parse(args: &[String]) -> Result<Command, String> {
    let Some(name) = args.first() else {
        return Err("missing command".to_string());
    };

    let cmd = match name.as_str() {
        "demo" => Command::Demo,
        "seeds" => Command::Seeds,
        "crystallize" => {
            if args.len() < 4 {
                return Err("crystallize requires <parent> <mutation> <text>".to_string());
            }
            let mutation_degree = args[2]
                .parse::<f64>()
                .map_err(|_| format!("invalid mutation degree: {}", args[2]))?;
            Command::Crystallize {
                parent_id: args[1].clone(),
                mutation_degree,
                content: args[3..].join(" "),
            }
        }
        "void" => {
            if args.len() < 3 {
                return Err("void requires <parent> <description>".to_string());
            }
            Command::Void {
                parent_id: args[1].clone(),
                description: args[2..].join(" "),
            }
        }
        "trace" => {
            let node_id = args.get(1).ok_or("trace requires a node id")?;
            Command::Trace {
                node_id: node_id.clone(),
            }
        }
        "sector" => {
            let raw = args.get(1).ok_or("sector requires earth, water or sky")?;
            let sector = raw.parse::<Sector>().map_err(|e| e.to_string())?;
            Command::Sector { sector }
        }
        "-h" | "--help" | "help" => Command::Help,
        other => return Err(format!("unknown command: {}", other)),
    };
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn crystallize_joins_content() {
        let cmd = parse(&args("crystallize SEED_LOG 0.2 The Sledge")).unwrap();
        assert_eq!(
            cmd,
            Command::Crystallize {
                parent_id: "SEED_LOG".to_string(),
                mutation_degree: 0.2,
                content: "The Sledge".to_string(),
            }
        );
    }

    #[test]
    fn crystallize_rejects_bad_mutation() {
        let err = parse(&args("crystallize SEED_LOG lots text")).unwrap_err();
        assert!(err.contains("invalid mutation degree"));
    }

    #[test]
    fn void_needs_description() {
        assert!(parse(&args("void SEED_LOG")).is_err());
        let cmd = parse(&args("void SEED_LOG bronze casting lost")).unwrap();
        assert_eq!(
            cmd,
            Command::Void {
                parent_id: "SEED_LOG".to_string(),
                description: "bronze casting lost".to_string(),
            }
        );
    }

    #[test]
    fn sector_names() {
        assert_eq!(
            parse(&args("sector sky")).unwrap(),
            Command::Sector { sector: Sector::Sky }
        );
        let err = parse(&args("sector fire")).unwrap_err();
        assert_eq!(err, "unknown sector: fire");
    }

    #[test]
    fn unknown_and_missing() {
        assert!(parse(&[]).is_err());
        assert!(parse(&args("explode")).is_err());
        assert!(parse(&args("trace")).is_err());
        assert_eq!(parse(&args("--help")).unwrap(), Command::Help);
    }
}
