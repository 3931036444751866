use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use log::info;

/// Write the partitioned graph as a Graphviz description.
///
/// Vertices of community 1 are colored red, those of community 0 blue. The
/// graph is declared `strict`, so Graphviz collapses duplicate edges on its
/// own and the raw edge list can be passed along unfiltered.
pub fn write_dot_file(
    edges: &[(usize, usize)],
    partition: &[usize],
    gv_path: &Path,
) -> io::Result<()> {
    let mut gv_file = File::create(gv_path)?;

    writeln!(gv_file, "strict graph communities {{")?;
    for (vertex, &community) in partition.iter().enumerate() {
        let color = if community == 1 { "red" } else { "blue" };
        writeln!(gv_file, "node{} [color={}];", vertex, color)?;
    }
    for &(vertex1, vertex2) in edges {
        writeln!(gv_file, "node{} -- node{};", vertex1, vertex2)?;
    }
    writeln!(gv_file, "}}")?;

    Ok(())
}

/// Render a Graphviz description to a PNG image with the `dot` layout tool.
///
/// `dot` ships with Graphviz and has to be installed separately.
pub fn render_png(gv_path: &Path, output_file: &Path) -> io::Result<()> {
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(gv_path)
        .arg("-o")
        .arg(output_file)
        .status()?;

    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("dot exited with {status}"),
        ));
    }

    info!("Rendered the communities to {}", output_file.display());
    Ok(())
}
