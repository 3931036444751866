use std::path::Path;
use std::time::Instant;
use SpectralCut::algorithms::SpectralBisection;
use SpectralCut::balance::{compute_part_sizes, imbalance};
use SpectralCut::graph::Graph;
use SpectralCut::io::{read_edge_list, write_partition_data_to_file};
use SpectralCut::render::{render_png, write_dot_file};
use SpectralCut::Partition;
use clap::Parser;
use log::warn;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the edge-list file, one "node1 node2" pair per line
    #[arg(short = 'f', long, default_value = "testdata/demo_nodes.txt")]
    nodes_file: String,

    /// Filename of the PNG image showing the two communities
    #[arg(short, long, default_value = "partition.png")]
    output_file: String,

    /// Filename of the intermediate Graphviz description
    #[arg(long, default_value = "graph.gv")]
    gv_file: String,

    /// Filename where the community mapping can be stored
    #[arg(long)]
    partition_file: Option<String>,

    /// Eigenvalues with a magnitude at or below this threshold count as zero
    #[arg(short, long, default_value_t = 1e-15)]
    zero_tolerance: f64
}


fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let edge_list = read_edge_list(Path::new(&args.nodes_file))?;
    let graph = Graph::from_edges(edge_list.node_count, &edge_list.edges);
    let mut partition = vec![0; graph.len()];
    let start = Instant::now();
    let diagnostics = SpectralBisection { zero_tolerance: args.zero_tolerance }
        .partition(&mut partition, &graph)?;
    let elapsed_time = start.elapsed();
    let edge_cut = graph.edge_cut(&partition);
    let community_sizes = compute_part_sizes(&partition, 2);
    let imbalance_of_partition = imbalance(2, &partition);
    if let Some(partition_file) = &args.partition_file {
        write_partition_data_to_file(&partition, partition_file)?;
    }
    write_dot_file(&edge_list.edges, &partition, Path::new(&args.gv_file))?;
    if let Err(error) = render_png(Path::new(&args.gv_file), Path::new(&args.output_file)) {
        warn!(
            "Rendering {} failed ({error}), the graph description is kept at {}",
            args.output_file, args.gv_file
        );
    }
    println!("Fiedler value {:?}", diagnostics.fiedler_value);
    println!("Community sizes {:?}", community_sizes);
    println!("Edge cut {:?}", edge_cut);
    println!("Imbalance {:?}", imbalance_of_partition);
    println!("Execution time {:?}", elapsed_time);
    Ok(())
}
