use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const FAKE_HOSTNAME: &str = "happy-sea-0a1b2c3.azurestaticapps.net";

/// Stand-ins for `npm`, `git`, `gh`, and `az` that log their arguments.
///
/// `gh run list` reports run 100 on its first call and run 101 afterwards;
/// `gh run view` reports `in_progress` once, then `completed` with
/// `$FAKE_GH_CONCLUSION` (default `success`).
pub struct FakeTools {
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
    state_dir: PathBuf,
}

impl FakeTools {
    pub fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        let state_dir = root.join("tool-state");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&state_dir).expect("Failed to create tool state dir");
        let log_file = root.join("tools.log");

        let tools = Self { bin_dir, log_file, state_dir };
        tools.write_script("npm", NPM_SCRIPT);
        tools.write_script("git", GIT_SCRIPT);
        tools.write_script("gh", GH_SCRIPT);
        tools.write_script("az", AZ_SCRIPT);
        tools
    }

    fn write_script(&self, name: &str, body: &str) {
        let content = body
            .replace("@LOG@", &self.log_file.to_string_lossy())
            .replace("@STATE@", &self.state_dir.to_string_lossy())
            .replace("@HOST@", FAKE_HOSTNAME);
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("Failed to write fake tool");

        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

const NPM_SCRIPT: &str = r#"#!/bin/sh
echo "npm $*" >> "@LOG@"
if [ -n "$FAKE_NPM_FAIL" ]; then
    echo "src/App.tsx(12,7): error TS2322: Type 'string' is not assignable to type 'number'." >&2
    exit 2
fi
exit 0
"#;

const GIT_SCRIPT: &str = r#"#!/bin/sh
echo "git $*" >> "@LOG@"
if [ -n "$FAKE_GIT_FAIL" ]; then
    echo "! [rejected] main -> main (non-fast-forward)" >&2
    exit 1
fi
exit 0
"#;

const GH_SCRIPT: &str = r#"#!/bin/sh
echo "gh $*" >> "@LOG@"

next_count() {
    file="@STATE@/$1"
    n=$(cat "$file" 2>/dev/null || echo 0)
    n=$((n + 1))
    echo "$n" > "$file"
    echo "$n"
}

case "$1 $2" in
    "run list")
        n=$(next_count list)
        if [ -n "$FAKE_GH_NO_RUNS" ]; then
            echo '[]'
            exit 0
        fi
        if [ "$n" -eq 1 ]; then id=100; else id=101; fi
        echo "[{\"conclusion\":\"\",\"createdAt\":\"2026-04-01T12:00:00Z\",\"databaseId\":$id,\"status\":\"queued\",\"url\":\"https://github.com/owner/site/actions/runs/$id\"}]"
        ;;
    "run view")
        n=$(next_count view)
        if [ "$n" -lt 2 ]; then
            echo '{"conclusion":"","status":"in_progress"}'
        else
            echo "{\"conclusion\":\"${FAKE_GH_CONCLUSION:-success}\",\"status\":\"completed\"}"
        fi
        ;;
    *)
        echo "unexpected gh invocation: $*" >&2
        exit 1
        ;;
esac
exit 0
"#;

const AZ_SCRIPT: &str = r#"#!/bin/sh
echo "az $*" >> "@LOG@"
echo "@HOST@"
"#;
