use std::fs;
use std::path::Path;

use qaprep::pipelines::clean;
use qaprep::processing::{compute_stats, merge, write_report, DatasetStats};

fn write_lines(path: &Path, prefix: &str, nb: usize) {
    let content: String = (0..nb)
        .map(|i| {
            format!(
                "{{\"question\":\"{} question {}\",\"answer\":\"{} answer {}\"}}\n",
                prefix, i, prefix, i
            )
        })
        .collect();
    fs::write(path, content).unwrap();
}

#[test]
fn merge_in_shard_order() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("clean");
    fs::create_dir(&src).unwrap();
    write_lines(&src.join("shard_a.jsonl"), "a", 3);
    write_lines(&src.join("shard_b.jsonl"), "b", 5);
    write_lines(&src.join("shard_c.jsonl"), "c", 2);

    let dst = dir.path().join("combined/combined.jsonl");
    assert_eq!(merge(&src, &dst).unwrap(), 10);

    let content = fs::read_to_string(&dst).unwrap();
    let prefixes: String = content.lines().map(|l| &l[13..14]).collect();
    assert_eq!(prefixes, "aaabbbbbcc");
}

#[test]
fn merge_empty_folder() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("combined.jsonl");
    assert_eq!(merge(dir.path(), &dst).unwrap(), 0);
    assert_eq!(fs::read_to_string(&dst).unwrap(), "");
}

#[test]
fn stats_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("combined.jsonl");
    fs::write(&src, "").unwrap();
    assert_eq!(
        compute_stats(&src).unwrap(),
        DatasetStats {
            num_records: 0,
            avg_question_tokens: 0.0,
            avg_answer_tokens: 0.0,
            vocab_size: 0,
        }
    );
}

#[test]
fn clean_merge_stats() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw");
    let shards = dir.path().join("clean");
    fs::create_dir(&raw).unwrap();

    fs::write(
        raw.join("se.json"),
        r#"[
            {"question": "<p>How do I list pods?</p>", "answer": "Use <code>kubectl get pods</code>."},
            {"question": "How do I list nodes?", "answer": "Use kubectl get nodes."}
        ]"#,
    )
    .unwrap();
    fs::write(
        raw.join("faq.jsonl"),
        "{\"title\": \"What is a pod?\", \"body\": \"A group of containers.\"}\n\
         {\"title\": \"Duplicate?\", \"body\": \"Use kubectl get nodes.\"}\n",
    )
    .unwrap();

    assert_eq!(clean(&raw.join("se.json"), &shards.join("se.jsonl"), 3, 20).unwrap(), 2);
    assert_eq!(clean(&raw.join("faq.jsonl"), &shards.join("faq.jsonl"), 3, 20).unwrap(), 2);

    let combined = shards.join("combined.jsonl");
    assert_eq!(merge(&shards, &combined).unwrap(), 4);

    let stats = compute_stats(&combined).unwrap();
    assert_eq!(stats.num_records, 4);
    // faq: 4 + 1, se: 5 + 5
    assert_eq!(stats.avg_question_tokens, 3.75);
    // faq: 4 + 4, se: 4 + 4
    assert_eq!(stats.avg_answer_tokens, 4.0);

    let report = dir.path().join("processed/stats.md");
    write_report(&stats, &report).unwrap();
    let report = fs::read_to_string(&report).unwrap();
    assert!(report.starts_with("# Dataset Statistics\n- Number of records: 4\n"));
    assert!(report.contains("- Average question tokens: 3.75\n"));
}
