use uricore::Uri;

fn main() {
    // Parse a URI and pick it apart
    let uri = Uri::parse("https://user@example.com:8080/path/to/it?query=value#hash")
        .expect("Failed to parse URI");

    println!("URI: {}", uri); // https://user@example.com:8080/path/to/it?query=value#hash
    println!("Scheme: {:?}", uri.scheme()); // Some("https")
    println!("User info: {}", uri.user_info()); // user
    println!("Host: {}", uri.host()); // example.com
    println!("Port: {:?}", uri.port()); // Some(8080)
    println!("Path: {:?}", uri.path()); // ["", "path", "to", "it"]
    println!("Query: {:?}", uri.query()); // Some("query=value")
    println!("Fragment: {:?}", uri.fragment()); // Some("hash")

    // Resolve a relative reference against a base
    let base = Uri::parse("http://example.com/a/b/c").expect("Failed to parse base");
    let reference = Uri::parse("../d?q").expect("Failed to parse reference");
    println!("Resolved: {}", base.resolve(&reference)); // http://example.com/a/d?q
}
