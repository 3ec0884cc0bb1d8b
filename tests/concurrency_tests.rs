//! A single decoded document shared by many reader threads.

use std::sync::Arc;
use std::thread;
use yamlquery::YamlQuery;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_query_is_send_and_sync() {
    assert_send_sync::<YamlQuery>();
}

#[test]
fn test_concurrent_readers_see_same_results() {
    let yq = Arc::new(YamlQuery::parse(
        b"name: Alice\nscores: [1.5, 2.5, 3.5]\nnested: {deep: {value: 7}}\n",
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let yq = Arc::clone(&yq);
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        (
                            yq.string(&["name"]).unwrap(),
                            yq.integers(&["scores"]).unwrap(),
                            yq.integer(&["nested", "deep", "value"]).unwrap(),
                        )
                    })
                    .last()
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let (name, scores, value) = handle.join().unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(scores, vec![1, 2, 3]);
        assert_eq!(value, 7);
    }
}

#[test]
fn test_scoped_threads_borrow_query() {
    let yq = YamlQuery::parse(b"items: [a, b, c, d]\n");

    thread::scope(|scope| {
        for index in 0..4 {
            let yq = &yq;
            scope.spawn(move || {
                let segment = index.to_string();
                assert!(yq.string(&["items", segment.as_str()]).is_ok());
            });
        }
    });
}
