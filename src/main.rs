use flavor_graph::analysis::FlavorAnalysis;
use flavor_graph::cellar::{mock, Spirit};
use flavor_graph::engine::pipeline::analyze;
use flavor_graph::layout::NodeKind;

/// Error while loading a cellar snapshot from disk.
struct CellarError {
    message: String,
    phase: &'static str,
}

impl std::fmt::Display for CellarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

fn main() {
    env_logger::init();

    let spirits = match std::env::args().nth(1) {
        Some(path) => match load_cellar(&path) {
            Ok(spirits) => {
                log::info!("loaded {} spirits from {}", spirits.len(), path);
                spirits
            }
            Err(e) => {
                eprintln!("flavor-graph: {}", e);
                std::process::exit(1);
            }
        },
        None => mock::sample_cellar(),
    };

    let result = analyze(&spirits);
    print_report(&result);

    // The payload the rendering layer consumes.
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("analysis serializes")
    );
}

/// Read a JSON array of spirits from `path`.
fn load_cellar(path: &str) -> Result<Vec<Spirit>, CellarError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CellarError {
        message: e.to_string(),
        phase: "read",
    })?;
    serde_json::from_str(&raw).map_err(|e| CellarError {
        message: e.to_string(),
        phase: "parse",
    })
}

fn print_report(result: &FlavorAnalysis) {
    println!("=== Taste Profile ===");
    println!("Owned spirits : {}", result.total_spirits);
    println!("Persona       : {}", result.persona);
    if !result.dominant_category.is_empty() {
        println!("Dominant      : {}", result.dominant_category);
    }

    if !result.category_distribution.is_empty() {
        println!("--- Categories ---");
        for bucket in &result.category_distribution {
            println!(
                "{:<12} {:>3} ({:>3}%)",
                bucket.category, bucket.count, bucket.percentage
            );
        }
    }

    if !result.top_keywords.is_empty() {
        println!("--- Top Flavors ---");
        for kw in &result.top_keywords {
            println!("{:<12} x{}", kw.keyword, kw.count);
        }
    }

    if let Some(ref nodes) = result.hierarchical_nodes {
        let products = nodes.iter().filter(|n| n.kind == NodeKind::Product).count();
        let tags = nodes.iter().filter(|n| n.kind == NodeKind::Tag).count();
        println!("--- Mind Map ---");
        println!("{} products, {} tags, {} nodes total", products, tags, nodes.len());
    }
    println!();
}
