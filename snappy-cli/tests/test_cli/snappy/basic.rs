use crate::add_test;
use crate::common::{Fixture, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};

// Test basic compression and decompression between files
add_test!(compress_decompress, async {
    const FILE_NAME: &str = "input.txt";
    const RESTORED: &str = "restored.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file(FILE_NAME, data);

    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);
    let restored_path = fixture.path(RESTORED);

    // Compress
    let output = fixture
        .run_cargo(&["compress", "-i", &file_path, "-o", &compressed_path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout_raw.is_empty());
    assert!(fixture.file_exists(&format!("{FILE_NAME}.sz")));

    // Decompress
    let output = fixture
        .run_cargo(&["decompress", "-i", &compressed_path, "-o", &restored_path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    // Input is never removed
    fixture.assert_files(&[FILE_NAME, RESTORED], &[data, data]);
});

// Test the short command aliases
add_test!(command_aliases, async {
    const FILE_NAME: &str = "alias.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file(FILE_NAME, data);

    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let output = fixture
        .run_cargo(&["c", "-i", &file_path, "-o", &compressed_path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.remove_file(FILE_NAME);

    let output = fixture
        .run_cargo(&["d", "-i", &compressed_path, "-o", &file_path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_files(&[FILE_NAME], &[data]);
});

// Test stdin to stdout in both directions
add_test!(pipe_roundtrip, async {
    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::new();

    let compressed = fixture.run_with_stdin_raw(&["compress"], data).await;
    assert!(compressed.status.success(), "{}", compressed.stderr);
    assert!(!compressed.stdout_raw.is_empty());
    assert!(compressed.stderr.is_empty());

    let restored = fixture
        .run_with_stdin_raw(&["decompress"], &compressed.stdout_raw)
        .await;
    assert!(restored.status.success(), "{}", restored.stderr);
    assert!(restored.stdout_raw == data);
});

// Test that running without a subcommand compresses
add_test!(default_action_is_compress, async {
    let data = REPETITIVE_DATA.as_bytes();
    let mut fixture = Fixture::new();

    let implicit = fixture.run_with_stdin_raw(&[], data).await;
    let explicit = fixture.run_with_stdin_raw(&["compress"], data).await;

    assert!(implicit.status.success());
    assert!(explicit.status.success());
    assert!(implicit.stdout_raw == explicit.stdout_raw);
    assert!(implicit.stdout_raw == snappy_core::compress(data).unwrap());
});

// Test that the default action honours top-level flags
add_test!(default_action_with_files, async {
    const FILE_NAME: &str = "default.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file(FILE_NAME, data);

    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let output = fixture
        .run_cargo(&["-i", &file_path, "-o", &compressed_path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    let explicit = fixture.run_cargo(&["compress", "-i", &file_path]).await;
    assert!(explicit.status.success());

    let written = fixture.read_file(&format!("{FILE_NAME}.sz"));
    assert!(written == explicit.stdout_raw);
});

// Test file input with stdout output
add_test!(file_to_stdout, async {
    const FILE_NAME: &str = "binary.bin";

    let mut fixture = Fixture::with_file(FILE_NAME, BINARY_DATA);
    let file_path = fixture.path(FILE_NAME);

    let compressed = fixture.run_cargo(&["compress", "-i", &file_path]).await;
    assert!(compressed.status.success(), "{}", compressed.stderr);

    fixture.write_file("binary.bin.sz", &compressed.stdout_raw);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let restored = fixture
        .run_cargo(&["decompress", "-i", &compressed_path])
        .await;
    assert!(restored.status.success(), "{}", restored.stderr);
    assert!(restored.stdout_raw == BINARY_DATA);
});

// Test stdin input with file output
add_test!(stdin_to_file, async {
    const OUT_NAME: &str = "from_stdin.sz";

    let data = REPETITIVE_DATA.as_bytes();
    let mut fixture = Fixture::new();
    let out_path = fixture.path(OUT_NAME);

    let output = fixture
        .run_with_stdin_raw(&["compress", "-o", &out_path], data)
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout_raw.is_empty());

    let written = fixture.read_file(OUT_NAME);
    assert!(snappy_core::decompress(&written).unwrap() == data);
});
