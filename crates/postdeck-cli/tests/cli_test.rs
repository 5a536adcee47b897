//! End-to-end command tests: spawn the real binary against an in-process
//! stub of the posts API and assert on the JSON view models.

use postdeck_testing::{StubPostsServer, TestFixture, seed_posts};
use serde_json::Value;

fn parse_stdout(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be JSON")
}

#[test]
fn post_list_renders_every_row() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "list", "--format", "json"])
        .output()
        .expect("run post list");

    assert!(output.status.success());
    let result = parse_stdout(&output);
    let posts = result["content"]["posts"]
        .as_array()
        .expect("posts array in content");
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "First Post");
    assert_eq!(result["content"]["total"], 3);
}

#[test]
fn post_show_returns_the_full_record() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "show", "2", "--format", "json"])
        .output()
        .expect("run post show");

    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["id"], "2");
    assert_eq!(result["content"]["title"], "Second Post");
    assert_eq!(result["content"]["author"], "Alex");
}

#[test]
fn post_show_fails_for_an_unknown_id() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "show", "999"])
        .output()
        .expect("run post show");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr was: {}", stderr);
    assert!(stderr.contains("404"), "stderr was: {}", stderr);
}

#[test]
fn created_post_is_stored_and_listed() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args([
            "post", "create", "--title", "T", "--author", "Au", "--content", "C", "--format",
            "json",
        ])
        .output()
        .expect("run post create");

    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["post"]["title"], "T");

    let stored = stub.posts();
    let created = stored
        .iter()
        .find(|post| post.title == "T")
        .expect("created post in store");
    assert_eq!(created.author, "Au");
    assert_eq!(created.content, "C");
    assert_eq!(stub.post_count(), 4);
}

#[test]
fn blank_create_fields_are_rejected_before_any_request() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "create", "--title", "", "--author", "Au", "--content", "C"])
        .output()
        .expect("run post create");

    assert!(!output.status.success());
    assert_eq!(stub.post_count(), 3);
}

#[test]
fn edit_updates_title_and_preserves_the_author() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "edit", "1", "--title", "Renamed", "--format", "json"])
        .output()
        .expect("run post edit");

    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["post"]["title"], "Renamed");
    assert_eq!(result["content"]["post"]["author"], "Sam");

    let stored = stub.posts();
    assert_eq!(stored[0].title, "Renamed");
    // Content was not passed, so it is pre-filled from the current post.
    assert_eq!(stored[0].content, "Welcome to the blog.");
}

#[test]
fn edit_with_no_fields_is_an_error() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "edit", "1"])
        .output()
        .expect("run post edit");

    assert!(!output.status.success());
}

#[test]
fn delete_with_yes_removes_the_post() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "delete", "2", "--yes", "--format", "json"])
        .output()
        .expect("run post delete");

    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["id"], "2");
    assert_eq!(result["content"]["remaining"], 2);
    assert_eq!(stub.post_count(), 2);
}

#[test]
fn delete_without_confirmation_sends_no_request() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    // stdin is a pipe, not a terminal, so the prompt declines.
    let output = fixture
        .command()
        .args(["post", "delete", "2"])
        .write_stdin("")
        .output()
        .expect("run post delete");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cancelled"), "stdout was: {}", stdout);
    assert_eq!(stub.post_count(), 3);
}

#[test]
fn no_command_prints_guidance() {
    let stub = StubPostsServer::launch(Vec::new()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture.command().output().expect("run postdeck");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quick commands"));
    assert!(stdout.contains("postdeck post list"));
}

#[test]
fn config_set_url_round_trips_and_drives_requests() {
    let stub = StubPostsServer::launch(seed_posts()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    // Persist the stub's URL, then run without the --api-url flag.
    let output = fixture
        .command_without_url_flag()
        .args(["config", "set-url", stub.base_url()])
        .output()
        .expect("run config set-url");
    assert!(output.status.success());

    let output = fixture
        .command_without_url_flag()
        .args(["config", "show", "--format", "json"])
        .output()
        .expect("run config show");
    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["api_url"], stub.base_url());
    assert_eq!(result["content"]["config_file_exists"], true);

    let output = fixture
        .command_without_url_flag()
        .args(["post", "list", "--format", "json"])
        .output()
        .expect("run post list via config");
    assert!(output.status.success());
    let result = parse_stdout(&output);
    assert_eq!(result["content"]["posts"].as_array().map(Vec::len), Some(3));
}

#[test]
fn empty_list_renders_a_plain_notice() {
    let stub = StubPostsServer::launch(Vec::new()).expect("launch stub");
    let fixture = TestFixture::new(stub.base_url());

    let output = fixture
        .command()
        .args(["post", "list"])
        .output()
        .expect("run post list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No posts"), "stdout was: {}", stdout);
}
