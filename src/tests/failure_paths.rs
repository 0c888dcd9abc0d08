use super::mock_reader::MockReader;
use crate::*;
use std::path::PathBuf;

const TOKEN: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

fn setup() -> (tempfile::TempDir, GenerateOptions, ChainRegistry) {
    let tmp = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: tmp.path().join("chains").join("evm"),
    };
    (tmp, options, ChainRegistry::builtin())
}

#[test]
fn test_missing_logo_stops_before_reading() {
    let (tmp, options, registry) = setup();
    let generator = TokenInfoGenerator::new(&registry, &options);
    let reader = MockReader::returning("Dai Stablecoin", "DAI", 18);

    let mut input = TokenInfoInput::new(TOKEN, ChainSelector::Name("ethereum".into()));
    input.logo = Some(tmp.path().join("missing.png"));

    let err = generator.prepare(input).unwrap_err();
    assert!(matches!(err, TokenInfoError::MissingLogo(ref p) if *p == tmp.path().join("missing.png")));
    assert_eq!(reader.calls(), 0);
    assert!(!options.output_dir.exists());
}

#[test]
fn test_logo_path_must_be_a_file() {
    let (tmp, options, registry) = setup();
    let generator = TokenInfoGenerator::new(&registry, &options);

    let mut input = TokenInfoInput::new(TOKEN, ChainSelector::Id(1));
    input.logo = Some(tmp.path().to_path_buf());
    assert!(matches!(
        generator.prepare(input),
        Err(TokenInfoError::MissingLogo(_))
    ));
}

#[test]
fn test_unknown_chain_creates_nothing() {
    let (_tmp, options, registry) = setup();
    let generator = TokenInfoGenerator::new(&registry, &options);

    for chain in [ChainSelector::Name("atlantis".into()), ChainSelector::Id(4_242_424)] {
        let err = generator
            .prepare(TokenInfoInput::new(TOKEN, chain.clone()))
            .unwrap_err();
        assert!(matches!(err, TokenInfoError::UnknownChain(ref s) if *s == chain.to_string()));
        assert!(err.to_string().contains(&chain.to_string()));
    }
    assert!(!options.output_dir.exists());
}

#[test]
fn test_invalid_address_is_rejected() {
    let (_tmp, options, registry) = setup();
    let generator = TokenInfoGenerator::new(&registry, &options);

    for bad in ["", "0x1234", "0xzz175474e89094c44da98b954eedeac495271d0f"] {
        let err = generator
            .prepare(TokenInfoInput::new(bad, ChainSelector::Id(1)))
            .unwrap_err();
        assert!(matches!(err, TokenInfoError::InvalidAddress { .. }), "{bad}: {err}");
    }
}

#[test]
fn test_invalid_rpc_url_is_rejected() {
    let (_tmp, options, registry) = setup();
    let generator = TokenInfoGenerator::new(&registry, &options);

    let mut input = TokenInfoInput::new(TOKEN, ChainSelector::Id(1));
    input.rpc_url = Some("localhost without scheme".into());
    assert!(matches!(
        generator.prepare(input),
        Err(TokenInfoError::InvalidRpcUrl { .. })
    ));
}

#[tokio::test]
async fn test_rpc_failure_writes_nothing() {
    let (tmp, options, registry) = setup();
    let logo = tmp.path().join("dai.png");
    std::fs::write(&logo, b"png").unwrap();

    let generator = TokenInfoGenerator::new(&registry, &options);
    let mut input = TokenInfoInput::new(TOKEN, ChainSelector::Name("ethereum".into()));
    input.logo = Some(logo);
    let job = generator.prepare(input).unwrap();

    let reader = MockReader::failing("connection refused");
    let err = generator.run(&job, &reader).await.unwrap_err();

    assert!(matches!(err, TokenInfoError::Rpc { .. }));
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(reader.calls(), 1);
    assert!(!options.output_dir.exists());
}

#[test]
fn test_default_options_point_at_chains_evm() {
    assert_eq!(GenerateOptions::default().output_dir, PathBuf::from("./chains/evm"));
}

#[tokio::test]
async fn test_logo_removed_after_prepare_writes_nothing() {
    let (tmp, options, registry) = setup();
    let logo = tmp.path().join("dai.png");
    std::fs::write(&logo, b"png").unwrap();

    let generator = TokenInfoGenerator::new(&registry, &options);
    let mut input = TokenInfoInput::new(TOKEN, ChainSelector::Id(1));
    input.logo = Some(logo.clone());
    let job = generator.prepare(input).unwrap();

    std::fs::remove_file(&logo).unwrap();
    let reader = MockReader::returning("Dai Stablecoin", "DAI", 18);
    let err = generator.run(&job, &reader).await.unwrap_err();

    assert!(matches!(err, TokenInfoError::Io { .. }), "{err}");
    assert_eq!(reader.calls(), 1);
    assert!(!options.output_dir.exists());
}
