//! `tree-trace` — replay an operation script against one tree variant.
//!
//! Usage:
//!   tree-trace <bst|avl|heap|splay|config.json> [ops...]
//!
//! Ops are `+v` (insert), `-v` (delete), `?v` (search) and `x` (extract-max).
//! Each applied operation is printed to stdout as one JSON line, followed by
//! a dump of the final tree. Set `RUST_LOG=step_forest=trace` to see engine
//! logs on stderr.

use std::io::{self, Write};
use std::process;

use step_forest::util::print;
use step_forest::{Operation, Playground, PlaygroundConfig, PlaygroundError, TreeKind};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "First argument must be a tree kind (bst, avl, heap, splay) or a config file.";

fn load_config(arg: &str) -> Result<PlaygroundConfig, String> {
    if arg.ends_with(".json") {
        let json = std::fs::read_to_string(arg).map_err(|e| format!("{arg}: {e}"))?;
        return PlaygroundConfig::from_json(&json).map_err(|e| e.to_string());
    }
    arg.parse::<TreeKind>()
        .map(PlaygroundConfig::new)
        .map_err(|e| e.to_string())
}

fn run<W: Write>(
    playground: &mut Playground,
    tokens: &[String],
    out: &mut W,
) -> Result<(), PlaygroundError> {
    for token in tokens {
        let op: Operation = token.parse()?;
        let applied = playground.apply(op)?;
        let line = serde_json::to_string(&applied).map_err(PlaygroundError::Serialize)?;
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", print(playground.forest().store()))?;
    out.flush()?;
    Ok(())
}

/// Everything after the program name; errors become the stderr message.
fn execute<W: Write>(args: &[String], out: &mut W) -> Result<(), String> {
    let (target, tokens) = args.split_first().ok_or_else(|| USAGE.to_string())?;
    let mut playground = Playground::new(load_config(target)?);
    run(&mut playground, tokens, out).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    if let Err(e) = execute(&args, &mut stdout.lock()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replays_script_as_json_lines() {
        let mut out = Vec::new();
        execute(&args(&["avl", "+1", "+2", "+3", "?2"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["op"], serde_json::json!({"op": "insert", "value": 1}));
        assert_eq!(first["outcome"]["status"], "inserted");

        let third: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        let kinds: Vec<&str> = third["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["kind"].as_str().unwrap())
            .collect();
        assert!(kinds.contains(&"rotate-left"));

        let search: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(search["outcome"]["status"], "found");
        assert_eq!(lines[4], "└─ 2 #1");
    }

    #[test]
    fn bad_token_stops_the_script() {
        let mut out = Vec::new();
        let err = execute(&args(&["bst", "+4", "4", "+5"]), &mut out).unwrap_err();
        assert_eq!(err, "invalid operation: 4");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn rejects_missing_or_unknown_kind() {
        let mut out = Vec::new();
        assert_eq!(execute(&[], &mut out).unwrap_err(), USAGE);
        assert!(execute(&args(&["btree"]), &mut out).is_err());
        assert!(load_config("missing-config.json").is_err());
        assert_eq!(load_config("heap").unwrap(), PlaygroundConfig::new(TreeKind::Heap));
    }

    #[test]
    fn unsupported_operation_is_an_error() {
        let mut out = Vec::new();
        let err = execute(&args(&["heap", "+1", "-1"]), &mut out).unwrap_err();
        assert!(err.contains("not supported"));
    }
}
