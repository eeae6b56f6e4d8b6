#![allow(missing_docs)]

use proptest::prelude::*;
use tokencraft::{
    CharVocabTokenizer,
    SubwordVocabTokenizer,
    TokenDecoder,
    TokenEncoder,
    VocabTokenizer,
    training::PairCounter,
    vocab::TokenVocab,
};

fn check_bijection(vocab: &TokenVocab<u32>) -> Result<(), TestCaseError> {
    for (idx, (token, span)) in vocab.iter().enumerate() {
        prop_assert_eq!(token as usize, idx);
        prop_assert_eq!(vocab.lookup_token(span), Some(token));
        prop_assert_eq!(vocab.lookup_span(token), Some(span));
    }
    prop_assert_eq!(vocab.lookup_span(vocab.len() as u32), None);
    Ok(())
}

/// Draw text from the corpus alphabet.
fn corpus_and_text() -> impl Strategy<Value = (String, String)> {
    "[a-e ]{1,60}".prop_flat_map(|corpus| {
        let chars: Vec<char> = corpus.chars().collect();
        let text = proptest::collection::vec(proptest::sample::select(chars), 0..40)
            .prop_map(|cs| cs.into_iter().collect::<String>());
        (Just(corpus), text)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn char_roundtrip((corpus, text) in corpus_and_text()) {
        let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus(&corpus).unwrap();
        let tokens = tokenizer.try_encode(&text).unwrap();
        prop_assert_eq!(tokens.len(), text.chars().count());
        prop_assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
        check_bijection(tokenizer.vocab())?;
    }

    #[test]
    fn subword_roundtrip(
        (corpus, text) in corpus_and_text(),
        max_vocab_size in 0usize..64,
    ) {
        let tokenizer: SubwordVocabTokenizer =
            SubwordVocabTokenizer::from_corpus(&corpus, max_vocab_size).unwrap();
        let tokens = tokenizer.try_encode(&text).unwrap();
        prop_assert!(tokens.len() <= text.chars().count());
        prop_assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
        check_bijection(tokenizer.vocab())?;
    }

    #[test]
    fn subword_vocab_growth(
        corpus in "[a-d]{0,80}",
        max_vocab_size in 0usize..40,
    ) {
        let chars: CharVocabTokenizer = CharVocabTokenizer::from_corpus(&corpus).unwrap();
        let alphabet = chars.vocab_size();

        let tokenizer: SubwordVocabTokenizer =
            SubwordVocabTokenizer::from_corpus(&corpus, max_vocab_size).unwrap();
        let vocab = tokenizer.vocab();

        // The alphabet comes first, whole; promotion respects the cap.
        prop_assert!(vocab.len() <= max_vocab_size.max(alphabet));
        prop_assert_eq!(&vocab.tokens()[..alphabet], chars.vocab().tokens());

        let counts: PairCounter = PairCounter::from_text(&corpus);
        for span in &vocab.tokens()[alphabet..] {
            prop_assert_eq!(span.chars().count(), 2);
            prop_assert!(counts.get(span).unwrap_or(0) > 1);
        }
    }

    #[test]
    fn segmentation_is_deterministic(
        corpus in "[a-c]{0,40}",
        text in "[a-c]{0,40}",
    ) {
        let tokenizer: SubwordVocabTokenizer =
            SubwordVocabTokenizer::from_corpus(&corpus, 20).unwrap();
        let first = tokenizer.segment(&text);
        prop_assert_eq!(tokenizer.segment(&text), first.clone());
        prop_assert_eq!(first.concat(), text);
    }
}
