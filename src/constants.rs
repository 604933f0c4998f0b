//! File and directory names produced by the generator.

/// Editor configuration directory
pub const VSCODE_DIR: &str = ".vscode";
pub const TESTS_DIR: &str = "tests";
pub const SRC_DIR: &str = "src";
pub const INCLUDE_DIR: &str = "include";
pub const ASSETS_DIR: &str = "assets";

pub const PROPERTIES_FILE: &str = "c_cpp_properties.json";
pub const TASKS_FILE: &str = "tasks.json";
pub const LAUNCH_FILE: &str = "launch.json";

pub const MAIN_SOURCE_FILE: &str = "main.cpp";
pub const MAIN_TEST_FILE: &str = "main_test.cpp";
pub const BUILD_FILE: &str = "CMakeLists.txt";
pub const STYLE_FILE: &str = ".clang-format";
pub const README_FILE: &str = "README.md";

/// Language standard pinned by the generated build and style files
pub const DEFAULT_CXX_STANDARD: u8 = 17;
