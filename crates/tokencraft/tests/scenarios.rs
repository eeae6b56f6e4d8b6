#![allow(missing_docs)]

use tokencraft::{
    CharVocabTokenizer,
    SubwordVocabTokenizer,
    TokenDecoder,
    TokenEncoder,
    TokencraftError,
    VocabTokenizer,
    segmentation::segment_longest_match,
};

const SAMPLES: &[&str] = &[
    "the cat sat on the mat",
    "hello world",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "a",
    "",
];

#[test]
fn char_tokenizer_abab() {
    let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abab").unwrap();

    assert_eq!(tokenizer.vocab().tokens(), &["a", "b"]);
    assert_eq!(tokenizer.try_encode("ab").unwrap(), vec![0, 1]);
    assert_eq!(tokenizer.try_decode_to_string(&[0, 1]).unwrap(), "ab");
}

#[test]
fn char_tokenizer_unknown_symbol() {
    let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abab").unwrap();

    let err = tokenizer.try_encode("c").unwrap_err();
    assert!(matches!(err, TokencraftError::UnknownSymbol { symbol: 'c' }));
}

#[test]
fn subword_tokenizer_aaaa() {
    let tokenizer: SubwordVocabTokenizer = SubwordVocabTokenizer::from_corpus("aaaa", 2).unwrap();

    assert_eq!(tokenizer.vocabulary(), &["a", "aa"]);
    assert_eq!(tokenizer.vocab_size(), 2);

    assert_eq!(
        segment_longest_match("aaaa", tokenizer.vocab()),
        vec!["aa", "aa"]
    );
}

#[test]
fn decode_unassigned_id() {
    let tokenizer: SubwordVocabTokenizer = SubwordVocabTokenizer::from_corpus("aaaa", 2).unwrap();

    let err = tokenizer.try_decode_to_string(&[99]).unwrap_err();
    assert!(matches!(err, TokencraftError::UnknownTokenId { token: 99 }));

    let chars: CharVocabTokenizer = CharVocabTokenizer::from_corpus("aaaa").unwrap();
    let err = chars.try_decode_to_string(&[0, 99]).unwrap_err();
    assert!(matches!(err, TokencraftError::UnknownTokenId { token: 99 }));
}

#[test]
fn subword_unseen_char() {
    let tokenizer: SubwordVocabTokenizer =
        SubwordVocabTokenizer::from_corpus("abab", 100).unwrap();

    assert_eq!(tokenizer.segment("z"), vec!["z"]);

    let err = tokenizer.try_encode("z").unwrap_err();
    assert!(matches!(err, TokencraftError::UnknownSymbol { symbol: 'z' }));
}

#[test]
fn roundtrip_samples() {
    let corpus = SAMPLES.concat();

    let chars: CharVocabTokenizer = CharVocabTokenizer::from_corpus(&corpus).unwrap();
    let subwords: SubwordVocabTokenizer =
        SubwordVocabTokenizer::from_corpus(&corpus, 120).unwrap();

    let tokenizers: [&dyn VocabTokenizer<u32>; 2] = [&chars, &subwords];
    for tokenizer in tokenizers {
        for text in SAMPLES {
            let tokens = tokenizer.try_encode(text).unwrap();
            let decoded = tokenizer.try_decode_to_string(&tokens).unwrap();
            assert_eq!(&decoded, text, "Roundtrip mismatch for {text:?}");
        }
    }
}

#[test]
fn shared_across_threads() {
    let tokenizer: std::sync::Arc<SubwordVocabTokenizer> = std::sync::Arc::new(
        SubwordVocabTokenizer::from_corpus("the cat sat on the mat", 30).unwrap(),
    );

    let expected = tokenizer.try_encode("cat sat mat").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = tokenizer.clone();
            std::thread::spawn(move || tokenizer.try_encode("cat sat mat").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
