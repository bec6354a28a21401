fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile author service proto (served by this workspace)
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile_protos(&["proto/author.proto"], &["proto/"])?;

    // Compile quote service proto (remote collaborator, only the client is used)
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/quote.proto"], &["proto/"])?;

    Ok(())
}
