//! CLI entry point for the `wgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use weighted_digraph::cli::commands::{self, GraphSpec, TraversalKind};
use weighted_digraph::types::{Edge, NodeId};
use weighted_digraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Build an in-memory weighted digraph from the command line and inspect it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph contents, shared by every command that inspects a graph.
#[derive(Args)]
struct GraphArgs {
    /// Node to add, as ID=VALUE (repeatable)
    #[arg(long = "node", value_parser = commands::parse_node, allow_hyphen_values = true)]
    nodes: Vec<(NodeId, String)>,

    /// Edge to add, as FROM:TO[:WEIGHT] (repeatable)
    #[arg(long = "edge", value_parser = commands::parse_edge, allow_hyphen_values = true)]
    edges: Vec<Edge>,

    /// Node to remove after building (repeatable)
    #[arg(long = "remove-node", allow_negative_numbers = true)]
    remove_nodes: Vec<NodeId>,

    /// Edge pair to remove after building, as FROM:TO (repeatable)
    #[arg(
        long = "remove-edge",
        value_parser = commands::parse_pair,
        allow_hyphen_values = true
    )]
    remove_edges: Vec<(NodeId, NodeId)>,
}

impl From<GraphArgs> for GraphSpec {
    fn from(args: GraphArgs) -> Self {
        Self {
            nodes: args.nodes,
            edges: args.edges,
            remove_nodes: args.remove_nodes,
            remove_edges: args.remove_edges,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample three-node graph and print it
    Demo,
    /// Render the graph (text output only)
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print node and edge counts
    Stats {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Show a node's adjacent nodes and edges
    Neighbors {
        /// Node ID
        #[arg(allow_negative_numbers = true)]
        node_id: NodeId,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first traversal from a starting node
    Dfs {
        /// Starting node ID
        #[arg(allow_negative_numbers = true)]
        start_id: NodeId,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first traversal from a starting node
    Bfs {
        /// Starting node ID
        #[arg(allow_negative_numbers = true)]
        start_id: NodeId,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Show { graph } => commands::cmd_show(&graph.into(), json),
        Commands::Stats { graph } => commands::cmd_stats(&graph.into(), json),
        Commands::Neighbors { node_id, graph } => {
            commands::cmd_neighbors(&graph.into(), node_id, json)
        }
        Commands::Dfs { start_id, graph } => {
            commands::cmd_traverse(&graph.into(), TraversalKind::Dfs, start_id, json)
        }
        Commands::Bfs { start_id, graph } => {
            commands::cmd_traverse(&graph.into(), TraversalKind::Bfs, start_id, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::InvalidArgument(_) => 3,
        GraphError::MissingFromNode(_)
        | GraphError::MissingToNode(_)
        | GraphError::NodeNotFound(_) => 4,
        GraphError::Json(_) => 5,
    }
}
