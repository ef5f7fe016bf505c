//! Scoped visual rules for the reformulation page, injected once per load.

pub const STYLE: &str = r#"
/* Global Styles */
body {
    margin: 0;
    background-color: #FAFAFA;
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
    color: #333;
}
.page { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

/* Title & Headers */
h1, h2, h3 { font-weight: 700; letter-spacing: -0.5px; color: #111; }

.page-header { text-align: center; padding: 40px 0; }
.page-header h1 { font-size: 3em; margin-bottom: 10px; }
.page-header h3 { font-weight: 300; color: #555; }
.page-header .authors { font-size: 1.1em; color: #444; margin-top: 15px; }
.page-header .affiliation { font-size: 0.9em; color: #888; }

/* Column layout */
.columns { display: flex; gap: 20px; align-items: stretch; }
.columns > * { flex: 1; min-width: 0; }

/* Custom Cards */
.method-card {
    background-color: white;
    padding: 20px;
    border-radius: 12px;
    border: 1px solid #e0e0e0;
    box-shadow: 0 4px 15px rgba(0,0,0,0.03);
    height: 100%;
    box-sizing: border-box;
}
.method-card .caption { color: #888; font-size: 0.85em; margin-top: -8px; }

/* Callout panels */
.panel { padding: 16px 20px; border-radius: 8px; }
.panel.info { background-color: #e7f2fa; border: 1px solid #cfe6f5; }
.panel.success { background-color: #e9f7ef; border: 1px solid #d0ecd9; }
.panel.muted { color: #666; }

/* Reformulation Text Styling */
.ref-box {
    background-color: #f8f9fa;
    border-left: 4px solid #ccc;
    padding: 10px 15px;
    font-family: 'Courier New', monospace;
    font-size: 0.9em;
    margin-bottom: 10px;
    white-space: pre-line;
}
.ref-box.eqr { border-left-color: #4A90E2; background-color: #eef6fc; }
.ref-box.q2e { border-left-color: #eb3b5a; }
.ref-box.q2d { border-left-color: #20bf6b; }

/* Ranking List Styling */
.rank-item {
    padding: 8px 12px;
    border-bottom: 1px solid #eee;
    display: flex;
    justify-content: space-between;
}
.rank-item:last-child { border-bottom: none; }
.rank-score { color: #888; font-size: 0.85em; }
.rank-ideal { background-color: #d4edda; border-radius: 5px; color: #155724; }
.rank-bad { background-color: #f8d7da; border-radius: 5px; color: #721c24; }

/* Highlight Classes */
.breadth { color: #d35400; font-weight: 600; }
.depth { color: #2980b9; font-weight: 600; }

/* Scenario selector */
.scenario-select {
    font-size: 1em;
    padding: 8px 12px;
    border-radius: 8px;
    border: 1px solid #ccc;
    background: white;
    margin-bottom: 20px;
}

/* Pipeline strip */
.pipeline-step { background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 15px; }
.pipeline-step.input { background-color: #e7f2fa; }
.pipeline-step.outcome { background-color: #e9f7ef; }

/* Dataset table */
.demo-table { width: 100%; border-collapse: collapse; background: white; }
.demo-table th, .demo-table td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #eee; }
.demo-table th { background: #f5f5f5; font-weight: 600; }

hr { border: none; border-top: 1px solid #e0e0e0; margin: 35px 0; }

.footer { text-align: center; margin-top: 50px; padding-bottom: 30px; color: #aaa; font-size: 0.8em; }
.caption { color: #888; font-size: 0.9em; }
a { color: #4A90E2; font-weight: 600; text-decoration: none; }
"#;
