//! Digest service behaviour against the built-in providers

#![cfg(all(feature = "native", feature = "subtle"))]

use hex_literal::hex;
use sha2_hash::{
    DigestService, Environment, HashAlgorithm, HashConfig, HashError, ProviderKind,
    RingSubtleCrypto, Sha2NativeProvider, create_digest_service,
};

const ABC_SHA256: [u8; 32] =
    hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
const ABC_SHA512: [u8; 64] = hex!(
    "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
    "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
);
const EMPTY_SHA256: [u8; 32] =
    hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
const EMPTY_SHA512: [u8; 64] = hex!(
    "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
    "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
);

async fn native_service() -> DigestService {
    DigestService::from_environment(&Environment::empty().with_native(Sha2NativeProvider::new()))
        .await
        .expect("native environment should resolve")
}

async fn subtle_service() -> DigestService {
    DigestService::from_environment(&Environment::empty().with_subtle(RingSubtleCrypto::new()))
        .await
        .expect("subtle environment should resolve")
}

async fn both_services() -> [DigestService; 2] {
    [native_service().await, subtle_service().await]
}

#[tokio::test]
async fn test_known_vectors_on_both_backends() {
    for service in both_services().await {
        let sha256 = service
            .digest_with(b"abc".to_vec(), HashAlgorithm::Sha256)
            .await
            .expect("SHA-256 digest should succeed");
        assert_eq!(sha256, ABC_SHA256, "{service:?}");

        let sha512 = service
            .digest_with(b"abc".to_vec(), HashAlgorithm::Sha512)
            .await
            .expect("SHA-512 digest should succeed");
        assert_eq!(sha512, ABC_SHA512, "{service:?}");
    }
}

#[tokio::test]
async fn test_empty_input() {
    for service in both_services().await {
        let sha256 = service.digest(Vec::new()).await.expect("digest of empty input");
        assert_eq!(sha256, EMPTY_SHA256);
        assert_eq!(
            sha256.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let sha512 = service
            .digest_named(Vec::new(), "sha512")
            .await
            .expect("digest of empty input");
        assert_eq!(sha512, EMPTY_SHA512);
    }
}

#[tokio::test]
async fn test_default_algorithm_is_sha256() {
    for service in both_services().await {
        let implicit = service.digest(b"hello world".to_vec()).await.unwrap();
        let explicit = service
            .digest_with(b"hello world".to_vec(), HashAlgorithm::Sha256)
            .await
            .unwrap();
        let named = service.digest_named(b"hello world".to_vec(), "sha256").await.unwrap();
        assert_eq!(implicit, explicit);
        assert_eq!(implicit, named);
        assert_eq!(implicit.len(), 32);
    }
}

#[tokio::test]
async fn test_backends_agree_on_large_input() {
    let data: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    let [native, subtle] = both_services().await;

    for algorithm in HashAlgorithm::ALL {
        let a = native.digest_with(data.clone(), algorithm).await.unwrap();
        let b = subtle.digest_with(data.clone(), algorithm).await.unwrap();
        assert_eq!(a, b, "{algorithm} mismatch between backends");
        assert_eq!(a.len(), algorithm.output_len());
    }
}

#[tokio::test]
async fn test_unsupported_algorithm_rejected_by_both_backends() {
    for service in both_services().await {
        for name in ["md5", "sha1", "sha384", "SHA-256"] {
            let err = service
                .digest_named(b"abc".to_vec(), name)
                .await
                .expect_err("unsupported algorithm should fail");
            assert_eq!(err, HashError::UnsupportedAlgorithm(name.to_string()));
            assert!(err.is_fatal());
        }
    }
}

#[tokio::test]
async fn test_subtle_preferred_when_both_present() {
    let env = Environment::from_config(&HashConfig::default());
    assert_eq!(
        env.available(),
        vec![ProviderKind::SubtleCrypto, ProviderKind::NativeHashing]
    );

    let service = DigestService::from_environment(&env).await.unwrap();
    assert_eq!(service.kind(), ProviderKind::SubtleCrypto);
}

#[tokio::test]
async fn test_falls_back_to_native() {
    let env = Environment::from_config(&HashConfig {
        native: true,
        subtle: false,
    });
    let service = DigestService::from_environment(&env).await.unwrap();
    assert_eq!(service.kind(), ProviderKind::NativeHashing);
}

#[tokio::test]
async fn test_environment_unsupported() {
    let env = Environment::from_config(&HashConfig {
        native: false,
        subtle: false,
    });
    assert!(env.available().is_empty());

    let err = DigestService::from_environment(&env)
        .await
        .expect_err("empty environment must not resolve");
    assert_eq!(err, HashError::EnvironmentUnsupported);
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_process_service() {
    let service = create_digest_service().await.expect("process environment");
    let digest = service.digest(b"abc".to_vec()).await.unwrap();
    assert_eq!(digest, ABC_SHA256);
}

#[tokio::test]
async fn test_concurrent_digests_do_not_mix() {
    for service in both_services().await {
        let inputs: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; usize::from(i) * 97]).collect();

        let pending: Vec<_> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let algorithm = HashAlgorithm::ALL[i % 2];
                (algorithm, service.digest_with(input.clone(), algorithm))
            })
            .collect();
        let (algorithms, futures): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
        let results = futures::future::join_all(futures).await;

        for ((input, algorithm), result) in inputs.iter().zip(algorithms).zip(results) {
            let expected = reference(input, algorithm);
            assert_eq!(result.unwrap().as_bytes(), expected.as_slice());
        }
    }
}

#[tokio::test]
async fn test_clones_share_backend() {
    let service = subtle_service().await;
    let clone = service.clone();
    let handle = tokio::spawn(async move { clone.digest(b"abc".to_vec()).await });
    let from_task = handle.await.unwrap().unwrap();
    let local = service.digest(b"abc".to_vec()).await.unwrap();
    assert_eq!(from_task, local);
}

#[tokio::test]
async fn test_result_encodings() {
    let digest = native_service().await.digest(b"abc".to_vec()).await.unwrap();
    assert_eq!(
        digest.to_string(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(digest.to_base64(), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    assert_eq!(digest.to_base64url(), "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
    assert_eq!(Vec::from(digest.clone()), ABC_SHA256.to_vec());
}

fn reference(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    use sha2::Digest;
    match algorithm {
        HashAlgorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
    }
}

#[test]
fn test_digest_without_tokio_runtime() {
    futures::executor::block_on(async {
        let env = Environment::empty().with_native(Sha2NativeProvider::new());
        let native = DigestService::from_environment(&env).await.unwrap();
        let env = Environment::empty().with_subtle(RingSubtleCrypto::new());
        let subtle = DigestService::from_environment(&env).await.unwrap();

        for service in [native, subtle] {
            let sha256 = service.digest(b"abc".to_vec()).await.unwrap();
            assert_eq!(sha256, ABC_SHA256, "{service:?}");
            let sha512 = service.digest_named(b"abc".to_vec(), "sha512").await.unwrap();
            assert_eq!(sha512, ABC_SHA512, "{service:?}");
        }
    });
}

#[tokio::test(flavor = "current_thread")]
async fn test_large_native_digest_on_current_thread_runtime() {
    let data = vec![0x5au8; 4 * 1024 * 1024];
    let service = native_service().await;
    let digest = service
        .digest_with(data.clone(), HashAlgorithm::Sha512)
        .await
        .unwrap();
    assert_eq!(digest.as_bytes(), reference(&data, HashAlgorithm::Sha512).as_slice());
}

#[tokio::test]
async fn test_dropping_pending_digest_is_harmless() {
    let service = subtle_service().await;
    drop(service.digest(vec![1u8; 1024]));
    let digest = service.digest(b"abc".to_vec()).await.unwrap();
    assert_eq!(digest, ABC_SHA256);
}

#[tokio::test]
async fn test_result_serializes_as_hex() {
    let digest = native_service().await.digest(b"abc".to_vec()).await.unwrap();
    assert_eq!(
        serde_json::to_string(&digest).unwrap(),
        "\"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\""
    );
    assert_eq!(
        format!("{digest:?}"),
        "HashResult(ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad)"
    );
}
