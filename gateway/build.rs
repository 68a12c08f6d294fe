fn main() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());

    // 编译 account.proto（仅客户端）
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir(&out_dir)
        .compile_protos(&["../proto/account/v1/account.proto"], &["../proto"])
        .expect("Failed to compile account.proto");

    println!("cargo:rerun-if-changed=../proto/account/v1/account.proto");
}
