//! Cluster a handful of short passages and print the groups with keywords.
//!
//! Run with `RUST_LOG=doclump=debug` to see the k-means trace.

use doclump::text::{StopWords, Tokenizer};
use doclump::{cluster_documents, ClusterRequest, DocumentClusterer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let documents = [
        "The stock market rallied as bank shares and trading volume climbed.",
        "Investors watched bond prices while the market digested bank earnings.",
        "Solar and wind energy now undercut coal on price in many regions.",
        "Carbon emissions fell as renewable energy capacity kept growing.",
        "The team clinched the league title after a late goal in the final match.",
        "A dramatic match: the home team scored twice to top the league.",
        "機器學習 與 深度學習 推動 人工智慧 發展",
        "人工智慧 與 機器學習 改變 軟體 開發",
    ];

    // --- Full pipeline with stop words ---
    let tokenizer = Tokenizer::new().with_stop_words(StopWords::builtin());
    let result = match DocumentClusterer::new(4)
        .with_seed(42)
        .with_tokenizer(tokenizer)
        .run_texts(&documents)
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("clustering failed: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "=== {} documents, {} terms, {} iterations (converged: {}) ===",
        documents.len(),
        result.stats.unique_tokens,
        result.iterations,
        result.converged
    );
    for cluster in &result.clusters {
        let keywords: Vec<String> = cluster
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.term, k.score))
            .collect();
        println!("\ncluster {}: {}", cluster.index, keywords.join(", "));
        for &i in &cluster.member_indices {
            println!("  [{i}] {}", documents[i]);
        }
    }

    // --- Host-style request/response ---
    let request = ClusterRequest::new(["apple banana", "banana apple", "car engine"], 2).with_seed(7);
    match cluster_documents(&request) {
        Ok(response) => {
            println!("\n=== request/response ===");
            for c in response.clusters {
                println!("  cluster {} => {:?} {:?}", c.index, c.member_indices, c.keywords);
            }
        }
        Err(e) => eprintln!("clustering failed: {e}"),
    }
}
