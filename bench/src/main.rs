use graph_paths_core::{breadth_first, depth_first, GraphBuilder, GraphError, GraphStore};
use std::time::Instant;

type Generator = fn(usize) -> Result<GraphStore, GraphError>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-paths-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary tree (deep DFS descent, wide BFS levels)");
        println!("  smallworld  Ring lattice + random shortcuts");
        println!("  random      Uniform random edges, possibly disconnected");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default vertex_count: 1000000");
        return;
    }

    if vertex_count < 32 {
        eprintln!("vertex_count must be at least 32");
        return;
    }

    println!("graph-paths-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "random" => vec![("Uniform random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as Generator),
            ("Small-world ring", gen_small_world),
            ("Uniform random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, vertex_count) {
            eprintln!("{}: {}", name, e);
        }
    }
}

fn run_benchmark(name: &str, generator: Generator, vertex_count: usize) -> Result<(), GraphError> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:>6} {:>12} {:>10}", "algo", "reached", "time");
    println!("{:->6} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let dfs = depth_first(&graph, 0)?;
    println!(
        "{:>6} {:>12} {:>8.1}ms",
        "dfs",
        dfs.visited_count(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let bfs = breadth_first(&graph, 0)?;
    println!(
        "{:>6} {:>12} {:>8.1}ms",
        "bfs",
        bfs.visited_count(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let far = graph.vertex_count() - 1;
    println!();
    for (label, result) in [("DFS", &dfs), ("BFS", &bfs)] {
        let t = Instant::now();
        let path = result.path_to(far)?;
        let elapsed = t.elapsed();
        match path {
            Some(p) => println!(
                "{} path 0 -> {}: {} hops in {:.3}ms",
                label,
                far,
                p.len() - 1,
                elapsed.as_secs_f64() * 1000.0
            ),
            None => println!("{} path 0 -> {}: not connected", label, far),
        }
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: O(V + E), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Ternary tree in breadth order: vertex `i` hangs off `(i - 1) / 3`.
fn gen_tree(vertex_count: usize) -> Result<GraphStore, GraphError> {
    let mut builder = GraphBuilder::new(vertex_count);
    for child in 1..vertex_count {
        builder.add_edge((child - 1) / 3, child)?;
    }
    Ok(builder.build())
}

/// Ring lattice where each vertex links to its `k` clockwise neighbors, with
/// a small share of links rewired to random targets.
fn gen_small_world(vertex_count: usize) -> Result<GraphStore, GraphError> {
    let k = 5usize;
    let p = 0.05f64;
    let mut builder = GraphBuilder::new(vertex_count);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        for j in 1..=k {
            let target = if rng.next_f64() < p {
                rng.next(vertex_count)
            } else {
                (i + j) % vertex_count
            };
            builder.add_edge(i, target)?;
        }
    }

    Ok(builder.build())
}

/// Uniform random edges, about three per vertex. Leaves some vertices
/// isolated, which exercises the unreachable branch.
fn gen_random(vertex_count: usize) -> Result<GraphStore, GraphError> {
    let mut builder = GraphBuilder::new(vertex_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..vertex_count * 3 {
        let u = rng.next(vertex_count);
        let w = rng.next(vertex_count);
        builder.add_edge(u, w)?;
    }

    Ok(builder.build())
}

/// Two dense clusters joined by a chain of bridge vertices. Every path from
/// vertex 0 to the far cluster squeezes through the bridge.
fn gen_barbell(vertex_count: usize) -> Result<GraphStore, GraphError> {
    let bridge_len = 10usize;
    let cluster = (vertex_count - bridge_len) / 2;
    let mut builder = GraphBuilder::new(vertex_count);
    let mut rng = FastRng::new(99999);

    let b_start = cluster + bridge_len;
    for offset in [0, b_start] {
        // Spanning chain keeps the cluster connected; random chords add density.
        for i in 1..cluster {
            builder.add_edge(offset + i - 1, offset + i)?;
        }
        for i in 0..cluster {
            for _ in 0..10 {
                builder.add_edge(offset + i, offset + rng.next(cluster))?;
            }
        }
    }

    let mut prev = cluster - 1;
    for id in cluster..b_start {
        builder.add_edge(prev, id)?;
        prev = id;
    }
    builder.add_edge(prev, b_start)?;

    // Odd leftovers from the halving hang off the far cluster.
    for id in (b_start + cluster)..vertex_count {
        builder.add_edge(b_start, id)?;
    }

    Ok(builder.build())
}
