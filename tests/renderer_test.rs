use std::path::{Path, PathBuf};

use cpp_builder::error::Error;
use cpp_builder::project::{sanitize_project_name, ProjectContext, Variant};
use cpp_builder::renderer::{render_project, MiniJinjaRenderer, RenderedProject, TemplateFile};

fn render(root: &str, variant: Variant) -> RenderedProject {
    let project = ProjectContext::new(root, variant).unwrap();
    render_project(&MiniJinjaRenderer::new(), &project).unwrap()
}

fn file<'a>(rendered: &'a RenderedProject, path: &str) -> &'a TemplateFile {
    rendered
        .files
        .iter()
        .find(|f| f.relative_path == Path::new(path))
        .unwrap_or_else(|| panic!("{} was not rendered", path))
}

fn paths(rendered: &RenderedProject) -> Vec<String> {
    rendered
        .files
        .iter()
        .map(|f| f.relative_path.display().to_string())
        .collect()
}

#[test]
fn test_sanitize_project_name() {
    assert_eq!(sanitize_project_name("my-proj"), "my_proj");
    assert_eq!(sanitize_project_name("a--b-c"), "a__b_c");
    assert_eq!(sanitize_project_name("plain"), "plain");
    let once = sanitize_project_name("x-y-z");
    assert_eq!(sanitize_project_name(&once), once);
}

#[test]
fn test_project_name_from_last_segment() {
    let project = ProjectContext::new("/work/my-proj", Variant::Basic).unwrap();
    assert_eq!(project.project_name(), "my_proj");
    assert_eq!(project.root(), Path::new("/work/my-proj"));

    let project = ProjectContext::new("/work/nested/hello-world/", Variant::WithTests).unwrap();
    assert_eq!(project.project_name(), "hello_world");
}

#[test]
fn test_project_name_requires_a_segment() {
    let result = ProjectContext::new("/", Variant::Basic);
    assert!(matches!(result, Err(Error::InvalidProjectPath { .. })));
}

#[test]
fn test_rendering_is_deterministic() {
    for variant in [Variant::Basic, Variant::WithTests] {
        assert_eq!(
            render("/work/my-proj", variant),
            render("/work/my-proj", variant)
        );
    }
}

#[test]
fn test_basic_layout() {
    let rendered = render("/work/my-proj", Variant::Basic);

    assert_eq!(rendered.directories, vec![PathBuf::from(".vscode")]);
    assert_eq!(
        paths(&rendered),
        vec![
            ".vscode/c_cpp_properties.json",
            ".vscode/launch.json",
            ".vscode/tasks.json",
            "main.cpp",
            "CMakeLists.txt",
            ".clang-format",
        ]
    );

    let protected: Vec<_> = rendered
        .files
        .iter()
        .filter(|f| f.protected)
        .map(|f| f.relative_path.clone())
        .collect();
    assert_eq!(
        protected,
        vec![
            PathBuf::from("main.cpp"),
            PathBuf::from("CMakeLists.txt"),
            PathBuf::from(".clang-format")
        ]
    );
}

#[test]
fn test_with_tests_layout() {
    let rendered = render("/work/my-proj", Variant::WithTests);

    assert_eq!(
        rendered.directories,
        [".vscode", "tests", "src", "include", "assets"]
            .map(PathBuf::from)
            .to_vec()
    );
    assert_eq!(
        paths(&rendered),
        vec![
            ".vscode/c_cpp_properties.json",
            ".vscode/tasks.json",
            ".vscode/launch.json",
            "tests/CMakeLists.txt",
            "tests/main_test.cpp",
            "include/README.md",
            "assets/README.md",
            "src/main.cpp",
            "CMakeLists.txt",
            ".clang-format",
        ]
    );

    for unprotected in [
        "tests/CMakeLists.txt",
        "tests/main_test.cpp",
        "include/README.md",
        "assets/README.md",
    ] {
        assert!(!file(&rendered, unprotected).protected);
    }
    assert!(file(&rendered, "src/main.cpp").protected);
}

#[test]
fn test_basic_content_embeds_project_name() {
    let rendered = render("/work/my-proj", Variant::Basic);

    let cmake = &file(&rendered, "CMakeLists.txt").content;
    assert!(cmake.contains("project(my_proj VERSION 1.0 LANGUAGES C CXX)"));
    assert!(cmake.contains("add_executable(my_proj main.cpp)"));
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 17)"));
    assert!(!cmake.contains("add_subdirectory(tests)"));
    assert!(!cmake.contains("install(DIRECTORY assets"));

    let launch = &file(&rendered, ".vscode/launch.json").content;
    assert!(launch.contains(r#""program": "${workspaceRoot}/build/bin/my_proj""#));
    assert!(!launch.contains("my_proj_test"));

    let tasks = &file(&rendered, ".vscode/tasks.json").content;
    assert!(tasks.contains("my_proj"));
    assert!(!tasks.contains("ctest"));

    assert!(file(&rendered, ".clang-format").content.contains("Standard: c++17"));
    assert!(file(&rendered, "main.cpp").content.ends_with("}\n"));
}

#[test]
fn test_with_tests_content_adds_test_targets() {
    let rendered = render("/work/my-proj", Variant::WithTests);

    let cmake = &file(&rendered, "CMakeLists.txt").content;
    assert!(cmake.contains("add_subdirectory(tests)"));
    assert!(cmake.contains("add_executable(my_proj ${SRC_FILES})"));
    assert!(cmake.contains("target_include_directories(my_proj PRIVATE include)"));
    assert!(cmake.contains("install(DIRECTORY assets DESTINATION .)"));
    assert!(!cmake.contains("main.cpp"));

    let launch = &file(&rendered, ".vscode/launch.json").content;
    assert!(launch.contains(r#""name": "my_proj_test""#));
    assert!(launch.contains(r#""program": "${workspaceRoot}/build/tests/my_proj_test""#));
    assert!(launch.contains(r#""cwd": "${workspaceRoot}/build/tests/""#));

    let tasks = &file(&rendered, ".vscode/tasks.json").content;
    assert!(tasks.contains(r#""label": "Tests""#));
    assert!(tasks.contains(r#""cwd": "${workspaceRoot}/build/tests""#));
    assert!(tasks.contains(r#""command": "ctest""#));

    let test_cmake = &file(&rendered, "tests/CMakeLists.txt").content;
    assert!(test_cmake.contains("add_executable(my_proj_test ${TEST_FILES})"));
    assert!(test_cmake.contains("gtest_discover_tests(my_proj_test)"));
    assert!(test_cmake.contains("cxx_std_17"));

    assert!(file(&rendered, "include/README.md").content.starts_with("# my_proj\n"));
    assert!(file(&rendered, "assets/README.md").content.starts_with("# my_proj\n"));
}

#[test]
fn test_editor_files_are_valid_json() {
    for variant in [Variant::Basic, Variant::WithTests] {
        let rendered = render("/work/my-proj", variant);
        for path in [
            ".vscode/c_cpp_properties.json",
            ".vscode/tasks.json",
            ".vscode/launch.json",
        ] {
            let content = &file(&rendered, path).content;
            assert!(
                serde_json::from_str::<serde_json::Value>(content).is_ok(),
                "{} is not valid JSON for {:?}",
                path,
                variant
            );
        }
    }
}

#[test]
fn test_style_file_is_shared_between_variants() {
    let basic = render("/work/a", Variant::Basic);
    let with_tests = render("/work/b", Variant::WithTests);
    assert_eq!(
        file(&basic, ".clang-format"),
        file(&with_tests, ".clang-format")
    );
}
