fn main() {
    cynic_codegen::register_schema("instruqt")
        .from_sdl_file("schemas/instruqt.graphql")
        .expect("Instruqt GraphQL schema file is missing")
        .as_default()
        .expect("failed to register Instruqt schema as default");
}
