use doclump::keywords::keyword_terms;
use doclump::text::{Script, StopWords, Tokenizer};
use doclump::{cluster_documents, ClusterRequest, ClusterResponse, DocumentClusterer, Error};

fn members(response: &ClusterResponse) -> Vec<Vec<usize>> {
    response
        .clusters
        .iter()
        .map(|c| c.member_indices.clone())
        .collect()
}

#[test]
fn near_identical_documents_share_a_cluster() {
    for seed in 0..20 {
        let request =
            ClusterRequest::new(["apple banana", "banana apple", "car engine"], 2).with_seed(seed);
        let response = cluster_documents(&request).unwrap();

        let mut groups = members(&response);
        groups.sort();
        assert_eq!(groups, vec![vec![0, 1], vec![2]], "seed {seed}");
    }
}

#[test]
fn empty_document_list_is_rejected() {
    let request = ClusterRequest::new(Vec::<String>::new(), 1);
    assert_eq!(cluster_documents(&request), Err(Error::EmptyInput));
}

#[test]
fn documents_without_tokens_are_rejected() {
    let request = ClusterRequest::new(["?", "a b", "..."], 1);
    assert_eq!(cluster_documents(&request), Err(Error::EmptyInput));
}

#[test]
fn too_many_clusters_is_rejected() {
    let request = ClusterRequest::new(["alpha", "beta", "gamma"], 5);
    assert_eq!(
        cluster_documents(&request),
        Err(Error::InvalidClusterCount {
            requested: 5,
            n_items: 3
        })
    );
}

#[test]
fn zero_clusters_is_rejected() {
    let request = ClusterRequest::new(["alpha", "beta"], 0);
    assert!(matches!(
        cluster_documents(&request),
        Err(Error::InvalidClusterCount { requested: 0, .. })
    ));
}

#[test]
fn keywords_follow_count_order() {
    // Single-letter words need a minimum token length of 1.
    let result = DocumentClusterer::new(2)
        .with_seed(4)
        .with_top_keywords(2)
        .with_tokenizer(Tokenizer::new().with_min_len(1))
        .run_texts(&["a a a b", "c c c d"])
        .unwrap();

    let cluster = result.cluster_of(0).unwrap();
    assert_eq!(cluster.member_indices, vec![0]);
    assert_eq!(keyword_terms(&cluster.keywords), vec!["a", "b"]);
    assert_eq!(cluster.keywords[0].count, 3);
    assert_eq!(cluster.keywords[1].count, 1);

    let other = result.cluster_of(1).unwrap();
    assert_eq!(keyword_terms(&other.keywords), vec!["c", "d"]);
}

#[test]
fn k_equal_to_document_count_gives_singletons() {
    let docs = ["rust cargo", "piano violin", "tennis racket", "bread butter"];
    let response = cluster_documents(&ClusterRequest::new(docs, 4).with_seed(9)).unwrap();
    assert_eq!(response.clusters.len(), 4);
    for c in &response.clusters {
        assert_eq!(c.member_indices.len(), 1);
    }
}

#[test]
fn ambiguous_input_still_partitions() {
    // Three mutually orthogonal documents, two clusters: grouping depends on
    // the random initialization, the partition does not.
    let docs = ["north river", "south mountain", "east desert"];
    for _ in 0..10 {
        let response = cluster_documents(&ClusterRequest::new(docs, 2)).unwrap();
        let mut all: Vec<usize> = members(&response).into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2]);
    }
}

#[test]
fn mixed_script_documents() {
    let docs = [
        "機器學習 AI 深度學習",
        "AI 機器學習 neural",
        "股票 市場 投資",
        "市場 股票 bank",
    ];
    let result = DocumentClusterer::new(2).with_seed(2).run_texts(&docs).unwrap();
    assert_eq!(
        result.cluster_of(0).unwrap().member_indices,
        vec![0, 1]
    );
    assert_eq!(
        result.cluster_of(2).unwrap().member_indices,
        vec![2, 3]
    );
}

#[test]
fn stop_words_drop_function_words() {
    let tokenizer = Tokenizer::new().with_stop_words(StopWords::builtin());
    let result = DocumentClusterer::new(1)
        .with_tokenizer(tokenizer)
        .with_top_keywords(3)
        .run_texts(&["the climate and the energy", "energy of the future"])
        .unwrap();
    assert_eq!(
        keyword_terms(&result.clusters[0].keywords),
        vec!["energy", "climate", "future"]
    );
}

#[test]
fn response_serializes_for_hosts() {
    let response = cluster_documents(
        &ClusterRequest::new(["solar wind", "wind solar"], 1).with_top_keywords(1),
    )
    .unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "clusters": [
                { "index": 0, "member_indices": [0, 1], "keywords": ["solar"] }
            ]
        })
    );
}

#[test]
fn scenario_keywords_through_request() {
    let request = ClusterRequest::new(["a a a b", "c c c d"], 2)
        .with_seed(4)
        .with_top_keywords(2)
        .with_min_token_len(1);
    let response = cluster_documents(&request).unwrap();

    let cluster = response
        .clusters
        .iter()
        .find(|c| c.member_indices == vec![0])
        .unwrap();
    assert_eq!(cluster.keywords, vec!["a", "b"]);
}

#[test]
fn request_stop_words_toggle() {
    let docs = ["the climate and the energy", "energy of the future"];
    let plain = cluster_documents(&ClusterRequest::new(docs, 1).with_top_keywords(1)).unwrap();
    assert_eq!(plain.clusters[0].keywords, vec!["the"]);

    let filtered = cluster_documents(
        &ClusterRequest::new(docs, 1)
            .with_top_keywords(1)
            .with_stop_words(true),
    )
    .unwrap();
    assert_eq!(filtered.clusters[0].keywords, vec!["energy"]);
}

#[test]
fn stop_list_chosen_by_detected_script() {
    let docs = ["因為 市場 股票 AI", "所以 市場 投資 AI"];
    let stop_words = StopWords::for_script(Script::detect(&docs.join(" ")));
    let result = DocumentClusterer::new(1)
        .with_tokenizer(Tokenizer::new().with_stop_words(stop_words))
        .with_top_keywords(5)
        .run_texts(&docs)
        .unwrap();

    let terms = keyword_terms(&result.clusters[0].keywords);
    assert_eq!(terms, vec!["市場", "ai", "股票", "投資"]);
    assert!(result.vocabulary.index_of("因為").is_none());
    assert!(result.vocabulary.index_of("所以").is_none());
}
