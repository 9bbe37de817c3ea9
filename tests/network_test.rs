//! End-to-end properties of the co-occurrence network builder.

use newslens::config::AnalysisConfig;
use newslens::corpus::Article;
use newslens::graph;
use newslens::text::{KeywordExtractor, SpaceTokenizer};

fn article(title: &str) -> Article {
    Article {
        item_id: "0".into(),
        title: title.into(),
        description: String::new(),
        pub_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        author: String::new(),
        link: String::new(),
        category: String::new(),
        subcategory: None,
        source: String::new(),
    }
}

fn empty_config() -> AnalysisConfig {
    AnalysisConfig::from_parts::<&str>(vec![], vec![], vec![], vec![])
}

#[test]
fn two_article_scenario_produces_expected_network() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![article("삼성전자 실적 발표"), article("실적 부진 우려")];

    let network = graph::build(&articles, "실적", &extractor).unwrap();

    let mut nodes: Vec<&str> = network.nodes().map(String::as_str).collect();
    nodes.sort_unstable();
    let mut expected = vec!["실적", "삼성전자", "발표", "부진", "우려"];
    expected.sort_unstable();
    assert_eq!(nodes, expected);

    for other in ["삼성전자", "발표", "부진", "우려"] {
        assert!(network.contains_edge("실적", other));
    }

    let counts = network.mention_counts();
    assert_eq!(counts.len(), 4);
    for other in ["삼성전자", "발표", "부진", "우려"] {
        assert_eq!(counts.get(other), Some(&1));
    }
}

#[test]
fn mention_counts_never_include_the_seed_and_always_name_nodes() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![
        article("실적 발표 임박"),
        article("발표 직후 주가 출렁"),
        article("실적 전망 상향"),
    ];

    let network = graph::build(&articles, "실적", &extractor).unwrap();
    for token in network.mention_counts().keys() {
        assert_ne!(token, "실적");
        assert!(network.contains_node(token));
    }
}

#[test]
fn edges_have_no_self_loops_or_duplicates() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![
        article("실적 실적 발표"),
        article("발표 실적 발표"),
        article("실적 발표"),
    ];

    let network = graph::build(&articles, "실적", &extractor).unwrap();
    let edges: Vec<(String, String)> = network
        .edges()
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect();
    for (a, b) in &edges {
        assert_ne!(a, b, "self-loop on {a}");
    }
    let mut canonical: Vec<(String, String)> = edges
        .iter()
        .map(|(a, b)| {
            if a <= b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            }
        })
        .collect();
    canonical.sort();
    canonical.dedup();
    assert_eq!(canonical.len(), edges.len());
}

#[test]
fn absent_seed_yields_empty_network() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![article("환율 급등 지속"), article("금리 인하 기대")];

    let network = graph::build(&articles, "실적", &extractor).unwrap();
    assert_eq!(network.node_count(), 0);
    assert_eq!(network.edge_count(), 0);
    assert!(network.mention_counts().is_empty());
}

#[test]
fn rebuild_from_identical_input_is_identical() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![
        article("삼성전자 실적 발표"),
        article("실적 부진 우려"),
        article("삼성전자 반도체 투자 확대"),
    ];

    let first = graph::build(&articles, "실적", &extractor).unwrap();
    let second = graph::build(&articles, "실적", &extractor).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json(), second.to_json());
}

#[test]
fn gazetteer_entity_ending_in_particle_stays_whole_in_network() {
    // "셀트리온제약을": final syllable is also a particle character, but an
    // exact gazetteer match must never be truncated.
    let config = AnalysisConfig::from_parts::<&str>(
        vec![],
        vec!["셀트리온제약을"],
        vec![],
        vec![],
    );
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![article("셀트리온제약을 실적 발표")];

    let network = graph::build(&articles, "실적", &extractor).unwrap();
    assert!(network.contains_node("셀트리온제약을"));
    assert!(!network.contains_node("셀트리온제약"));
    assert!(network.contains_edge("실적", "셀트리온제약을"));
}

#[test]
fn second_hop_tokens_render_at_baseline_size() {
    let config = empty_config();
    let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
    let articles = vec![
        article("실적 발표 임박"),
        article("실적 발표 연기"),
        article("발표 현장 중계"),
    ];

    let network = graph::build(&articles, "실적", &extractor).unwrap();
    let sizes = graph::node_sizes(&network);

    // "발표" is first-hop with two qualifying articles.
    assert_eq!(sizes.get("발표"), Some(&500));
    // "현장"/"중계" are second-hop only; the seed itself is unranked.
    assert_eq!(sizes.get("현장"), Some(&graph::BASE_NODE_SIZE));
    assert_eq!(sizes.get("중계"), Some(&graph::BASE_NODE_SIZE));
    assert_eq!(sizes.get("실적"), Some(&graph::BASE_NODE_SIZE));
}
