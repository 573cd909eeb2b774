use criterion::{black_box, criterion_group, criterion_main, Criterion};
use declscript_parser::Parser;

// A medium-size declaration source with various constructs
const DECLARATION_SOURCE: &str = r#"
"use strict";

// Messaging protocol surface
export module Protocol {
    export interface Envelope {
        id: string;
        channel: string;
        kind: 'request' | 'response' | 'event';
        payload: any;
        timestamps: number[];
    }

    export interface Request extends Envelope {
        method: string;
        params?: any;
        timeoutMs?: number;
    }

    export interface Response extends Envelope {
        ok: boolean;
        error?: ErrorInfo;
    }

    export interface ErrorInfo {
        code: number;
        message: string;
        retriable: boolean;
        details: { source: string; hint?: string; };
    }

    /* Nested configuration surface */
    export module Settings {
        export interface Transport {
            host: string;
            port: number;
            scheme: 'tcp' | 'tls' | 'pipe';
            fallbacks: string[];
        }

        export interface Limits {
            maxInFlight: number;
            maxPayloadBytes: number;
            compression?: boolean;
        }
    }
}

export interface SessionInfo {
    user: string;
    roles: string[];
    module: string;
    active: boolean;
}
"#;

fn bench_parse_declarations(c: &mut Criterion) {
    c.bench_function("parse_declarations_medium", |b| {
        b.iter(|| {
            let parser = Parser::new("bench.d.ts", black_box(DECLARATION_SOURCE));
            let source_file = parser.parse_source_file();
            black_box(source_file)
        });
    });
}

criterion_group!(benches, bench_parse_declarations);
criterion_main!(benches);
