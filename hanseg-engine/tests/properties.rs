//! Property tests over the public splitter

use hanseg_engine::{Backend, Output, SentenceSplitter};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[가-힣 .!?,'\"()ㅋ~0-9a-z\n]{0,80}"
}

fn splitter(backend: Backend, strip: bool, workers: usize) -> SentenceSplitter {
    SentenceSplitter::builder()
        .backend(backend)
        .strip(strip)
        .num_workers(Some(workers))
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_unstripped_output_reconstructs_input(text in text_strategy()) {
        for backend in [Backend::Punct, Backend::Fast] {
            let sentences = splitter(backend, false, 1).split_text(&text).unwrap();
            if text.trim().is_empty() {
                prop_assert!(sentences.is_empty());
            } else {
                prop_assert_eq!(sentences.concat(), text.clone());
            }
        }
    }

    #[test]
    fn prop_parallel_batch_matches_single_calls(
        texts in prop::collection::vec(text_strategy(), 2..12)
    ) {
        let parallel = splitter(Backend::Punct, true, 3);
        let batch = parallel.split_sentences(texts.clone()).unwrap();
        let singles: Vec<Vec<String>> = texts
            .iter()
            .map(|t| parallel.split_text(t).unwrap())
            .collect();
        prop_assert_eq!(batch, Output::Batch(singles));
    }

    #[test]
    fn prop_cached_result_equals_fresh_result(text in text_strategy()) {
        let cached = splitter(Backend::Punct, true, 1);
        let first = cached.split_text(&text).unwrap();
        let second = cached.split_text(&text).unwrap();
        prop_assert_eq!(&first, &second);

        let uncached = SentenceSplitter::builder()
            .backend(Backend::Punct)
            .cache_capacity(0)
            .build()
            .unwrap();
        prop_assert_eq!(first, uncached.split_text(&text).unwrap());
    }
}
