//! Binario `jsontools`.
//!
//! Subcomandos: process / validate / upload / tree / history / healthcheck.
//! Si hay DATABASE_URL en el entorno, los comandos que tocan historial
//! (process, upload, history) usan el backend Postgres; de lo contrario un
//! historial en memoria que no persiste entre procesos.

use std::io::Read;
use std::process::exit;

use json_core::history::HistoryStore;
use json_core::model::{Indent, JsonOperation, ProcessRequest};
use json_core::tree::{render_tree, DEFAULT_EXPAND_DEPTH};
use json_core::upload::FileUpload;
use json_core::InMemoryHistoryStore;
use json_persistence::pg::{PgHistoryStore, PoolProvider};
use jsontools_rust::{AppConfig, JsonToolsService};

enum Command {
    Process { request: ProcessRequest },
    Upload { upload: FileUpload },
    History,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        exit(2);
    }

    match args[1].as_str() {
        "process" => {
            let mut op: Option<String> = None;
            let mut indent: Option<String> = None;
            let (mut file, mut inline) = (None, None);
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--op" => { i += 1; if i < args.len() { op = Some(args[i].clone()); } }
                    "--indent" => { i += 1; if i < args.len() { indent = Some(args[i].clone()); } }
                    "--file" => { i += 1; if i < args.len() { file = Some(args[i].clone()); } }
                    "--json" => { i += 1; if i < args.len() { inline = Some(args[i].clone()); } }
                    _ => {}
                }
                i += 1;
            }
            let Some(op) = op else {
                eprintln!("Uso: jsontools process --op <validate|format|minify|sort-keys> [--indent N] [--file PATH | --json TEXT]");
                exit(2);
            };
            // Frontera: operación y sangría se validan antes de tocar el motor.
            let operation: JsonOperation = match op.parse() {
                Ok(parsed) => parsed,
                Err(e) => { eprintln!("[jsontools] {e}"); exit(2); }
            };
            let indent_size = match indent {
                None => Indent::default(),
                Some(raw) => match raw.parse::<u8>().map_err(|_| raw.clone()).and_then(|n| Indent::new(n).map_err(|_| raw.clone())) {
                    Ok(parsed) => parsed,
                    Err(raw) => { eprintln!("[jsontools] sangría inválida (1..=8): {raw}"); exit(2); }
                },
            };
            let content = read_content(file, inline);
            let request = ProcessRequest::with_indent(content, operation, indent_size);
            run(Command::Process { request });
        }
        "validate" => {
            let (file, inline) = parse_input_flags(&args);
            let content = read_content(file, inline);
            let service = JsonToolsService::<InMemoryHistoryStore>::new();
            let result = service.validate_json(&content);
            if result.is_valid {
                println!("valid");
                exit(0);
            }
            match (result.line_number, result.column_number) {
                (Some(line), Some(column)) => {
                    eprintln!("invalid (line {line}, column {column}): {}",
                              result.error_message.unwrap_or_default());
                }
                _ => eprintln!("invalid: {}", result.error_message.unwrap_or_default()),
            }
            exit(3);
        }
        "upload" => {
            let mut file: Option<String> = None;
            let mut declared: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--file" => { i += 1; if i < args.len() { file = Some(args[i].clone()); } }
                    "--declared-size" => { i += 1; if i < args.len() { declared = Some(args[i].clone()); } }
                    _ => {}
                }
                i += 1;
            }
            let Some(path) = file else {
                eprintln!("Uso: jsontools upload --file PATH [--declared-size N]");
                exit(2);
            };
            let file_content = read_content(Some(path.clone()), None);
            let file_size = match declared {
                None => file_content.chars().count(),
                Some(raw) => match raw.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => { eprintln!("[jsontools] tamaño declarado inválido: {raw}"); exit(2); }
                },
            };
            let file_name = path.rsplit('/').next().unwrap_or(&path).to_string();
            let upload = FileUpload { file_name, file_content, file_size };
            run(Command::Upload { upload });
        }
        "tree" => {
            let mut depth: Option<String> = None;
            let (mut file, mut inline) = (None, None);
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--depth" => { i += 1; if i < args.len() { depth = Some(args[i].clone()); } }
                    "--file" => { i += 1; if i < args.len() { file = Some(args[i].clone()); } }
                    "--json" => { i += 1; if i < args.len() { inline = Some(args[i].clone()); } }
                    _ => {}
                }
                i += 1;
            }
            let expand_depth = match depth {
                None => DEFAULT_EXPAND_DEPTH,
                Some(raw) => match raw.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => { eprintln!("[jsontools] profundidad inválida: {raw}"); exit(2); }
                },
            };
            let content = read_content(file, inline);
            match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(value) => {
                    print!("{}", render_tree(&value, expand_depth));
                    exit(0);
                }
                Err(e) => { eprintln!("[jsontools] JSON inválido: {e}"); exit(3); }
            }
        }
        "history" => run(Command::History),
        "healthcheck" => {
            let service = JsonToolsService::<InMemoryHistoryStore>::new();
            let health = service.healthcheck();
            println!("{}", serde_json::to_string(&health).expect("serialize healthcheck"));
            exit(0);
        }
        _ => {
            print_usage();
            exit(2);
        }
    }
}

/// Resuelve el backend de historial según el entorno y despacha el comando.
fn run(command: Command) {
    let config = AppConfig::from_env();
    match config.database_url {
        Some(_) => {
            let pool = match json_persistence::build_dev_pool_from_env() {
                Ok(p) => p,
                Err(e) => { eprintln!("[jsontools] pool error: {e}"); exit(5); }
            };
            let store = PgHistoryStore::new(PoolProvider { pool });
            let code = dispatch(JsonToolsService::with_history(store), command, true);
            exit(code);
        }
        None => {
            let code = dispatch(JsonToolsService::<InMemoryHistoryStore>::new(), command, false);
            exit(code);
        }
    }
}

fn dispatch<H: HistoryStore>(mut service: JsonToolsService<H>, command: Command, durable: bool) -> i32 {
    match command {
        Command::Process { request } => {
            let result = service.process_json(&request);
            match result.result_text {
                Some(text) => {
                    println!("{text}");
                    0
                }
                None => {
                    eprintln!("[jsontools] {}", result.error_message.unwrap_or_default());
                    3
                }
            }
        }
        Command::Upload { upload } => {
            let result = service.process_file_upload(&upload);
            match result.result_text {
                Some(text) => {
                    println!("{text}");
                    0
                }
                None => {
                    eprintln!("[jsontools] {}", result.error_message.unwrap_or_default());
                    3
                }
            }
        }
        Command::History => {
            if !durable {
                eprintln!("[jsontools] history requiere DATABASE_URL para el backend persistente");
                return 5;
            }
            match service.get_history() {
                Ok(records) => {
                    for record in records {
                        println!("#{} [{}] {} success={} sizes={}->{}",
                                 record.id,
                                 record.created_at.to_rfc3339(),
                                 record.operation,
                                 record.success,
                                 record.original_size,
                                 record.processed_size.map(|n| n.to_string()).unwrap_or_else(|| "-".into()));
                    }
                    0
                }
                Err(e) => {
                    eprintln!("[jsontools] history error: {e}");
                    5
                }
            }
        }
    }
}

fn parse_input_flags(args: &[String]) -> (Option<String>, Option<String>) {
    let (mut file, mut inline) = (None, None);
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => { i += 1; if i < args.len() { file = Some(args[i].clone()); } }
            "--json" => { i += 1; if i < args.len() { inline = Some(args[i].clone()); } }
            _ => {}
        }
        i += 1;
    }
    (file, inline)
}

/// Lee el contenido desde --file, --json o stdin (en ese orden de prioridad).
fn read_content(file: Option<String>, inline: Option<String>) -> String {
    if let Some(path) = file {
        match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => { eprintln!("[jsontools] no se pudo leer {path}: {e}"); exit(5); }
        }
    } else if let Some(text) = inline {
        text
    } else {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("[jsontools] stdin: {e}");
            exit(5);
        }
        buf
    }
}

fn print_usage() {
    eprintln!("Uso: jsontools <process|validate|upload|tree|history|healthcheck> [flags]");
    eprintln!("  process     --op <validate|format|minify|sort-keys> [--indent N] [--file PATH | --json TEXT]");
    eprintln!("  validate    [--file PATH | --json TEXT]");
    eprintln!("  upload      --file PATH [--declared-size N]");
    eprintln!("  tree        [--depth N] [--file PATH | --json TEXT]");
    eprintln!("  history");
    eprintln!("  healthcheck");
}
