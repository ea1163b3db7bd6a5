//! End-to-end pipeline tests against the real filesystem.
//!
//! The external generator is replaced by a [`ScriptedRunner`] that
//! materializes a fixture tree; everything else (temp workdir lifecycle,
//! tree collection, manifest merge, removal filter) runs for real.

use nextplate_adapters::{FsCollector, JsonManifestEditor, ScriptedRunner, TempWorkdirs};
use nextplate_core::{
    application::ScaffoldService,
    domain::{FileKind, ModuleConfig, ScaffoldContext},
    error::{ProcessError, ScaffoldError},
};

const PACKAGE_JSON: &str = r#"{
  "name": "next-app",
  "dependencies": {"react": "^19.0.0", "next": "15.1.0"},
  "devDependencies": {"typescript": "^5"}
}"#;

const SSR_NEXT_CONFIG: &str = "const nextConfig = {};\nexport default nextConfig;\n";
const STATIC_NEXT_CONFIG: &str =
    "const nextConfig = { output: 'export' };\nexport default nextConfig;\n";

const HEALTH_ROUTE: &str = "src/app/api/health/route.ts";

// A 1x1 PNG header is enough to exercise the binary path.
const LOGO_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn baseline_fixture(next_config: &str, with_health_route: bool) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = vec![
        ("package.json".into(), PACKAGE_JSON.into()),
        ("next.config.ts".into(), next_config.into()),
        ("src/app/page.tsx".into(), b"export default Page".to_vec()),
        ("public/logo.svg".into(), LOGO_BYTES.to_vec()),
    ];
    if with_health_route {
        files.push((HEALTH_ROUTE.into(), b"export async function GET() {}".to_vec()));
    }
    files
}

fn service(runner: ScriptedRunner) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(runner),
        Box::new(TempWorkdirs::new()),
        Box::new(FsCollector::new()),
        Box::new(JsonManifestEditor::new()),
    )
}

fn config(json: &str) -> ModuleConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_pipeline_merges_collects_filters_and_cleans_up() {
    let runner = ScriptedRunner::new("next-app", baseline_fixture(SSR_NEXT_CONFIG, true));
    let svc = service(runner.clone());

    let module = config(
        r#"{
            "dependencies": {
                "npm": {
                    "dependencies": {"zustand": "^5.0.0", "next": "15.2.0"},
                    "devDependencies": {"prettier": "^3.0.0"}
                }
            },
            "generation": {"files": {"remove": ["README.md"]}}
        }"#,
    );

    let files = svc
        .scaffold(&module, &ScaffoldContext::new("storefront"))
        .unwrap();

    // baseline files are present
    assert!(files.contains("src/app/page.tsx"));
    assert!(files.contains("next.config.ts"));

    // the manifest in the map reflects the right-biased merge
    let manifest = files.get("package.json").unwrap();
    assert_eq!(manifest.kind, FileKind::Text);
    assert!(manifest.content.contains("\"zustand\": \"^5.0.0\""));
    assert!(manifest.content.contains("\"next\": \"15.2.0\""));
    assert!(manifest.content.contains("\"react\": \"^19.0.0\""));
    assert!(manifest.content.contains("\"prettier\": \"^3.0.0\""));

    // binary payloads are tagged and decodable
    let logo = files.get("public/logo.svg").unwrap();
    assert_eq!(logo.kind, FileKind::Binary);
    assert_eq!(logo.decode().unwrap(), LOGO_BYTES);

    // removing a path the generator never produced is not an error
    assert!(!files.contains("README.md"));

    // generator ran with the app-router flag inside the allocated workdir,
    // and that workdir is gone afterwards
    let invocation = &runner.invocations()[0];
    assert!(invocation.args.contains(&"--app".to_string()));
    assert!(!invocation.cwd.exists());
}

#[test]
fn pages_router_context_omits_app_flag() {
    let runner = ScriptedRunner::new("next-app", baseline_fixture(SSR_NEXT_CONFIG, true));
    let svc = service(runner.clone());

    let ctx = ScaffoldContext::new("storefront").with_field("routerType", "pages");
    svc.scaffold(&ModuleConfig::default(), &ctx).unwrap();

    assert!(!runner.invocations()[0].args.contains(&"--app".to_string()));
}

#[test]
fn generator_failure_aborts_and_removes_workdir() {
    let runner = ScriptedRunner::failing(1, "npm ERR! network");
    let svc = service(runner.clone());

    let err = svc
        .scaffold(&ModuleConfig::default(), &ScaffoldContext::new("storefront"))
        .unwrap_err();

    match err {
        ScaffoldError::Generator(ProcessError::Exit { code, stderr, .. }) => {
            assert_eq!(code, 1);
            assert!(stderr.contains("network"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(!runner.invocations()[0].cwd.exists());
}

#[test]
fn static_export_scenario_has_marker_and_no_health_route() {
    let runner = ScriptedRunner::new("next-app", baseline_fixture(STATIC_NEXT_CONFIG, true));
    let svc = service(runner);

    // static rendering: the module config removes the runtime-only route
    let module = config(&format!(
        r#"{{"generation": {{"files": {{"remove": ["{HEALTH_ROUTE}"]}}}}}}"#
    ));
    let files = svc
        .scaffold(&module, &ScaffoldContext::new("storefront"))
        .unwrap();

    let next_config = files.get("next.config.ts").unwrap();
    assert!(next_config.content.contains("output: 'export'"));
    assert!(!files.contains(HEALTH_ROUTE));
}

#[test]
fn ssr_scenario_keeps_health_route_and_has_no_export_marker() {
    let runner = ScriptedRunner::new("next-app", baseline_fixture(SSR_NEXT_CONFIG, true));
    let svc = service(runner);

    let files = svc
        .scaffold(&ModuleConfig::default(), &ScaffoldContext::new("storefront"))
        .unwrap();

    let next_config = files.get("next.config.ts").unwrap();
    assert!(!next_config.content.contains("output: 'export'"));
    assert!(files.contains(HEALTH_ROUTE));
}
