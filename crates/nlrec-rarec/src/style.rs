//! Scoped visual rules for the conversational-recommendation page.

pub const STYLE: &str = r#"
/* General Background & Font */
body {
    margin: 0;
    background-color: #FAFAFA;
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
    color: #333;
}
.page { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

h1, h2, h3 { font-weight: 700; color: #111; }

.page-header { text-align: center; padding: 40px 0; }
.page-header h1 { font-size: 3.5em; margin-bottom: 10px; font-weight: 700; }
.page-header h3 { font-weight: 300; color: #666; }
.page-header .authors { font-size: 1.1em; color: #555; margin-top: 20px; }
.page-header .affiliation { font-size: 0.8em; color: #888; }
.page-header .links { margin-top: 15px; }
.page-header .links a { margin-right: 15px; text-decoration: none; color: #4A90E2; font-weight: 600; }

.columns { display: flex; gap: 20px; align-items: stretch; }
.columns > * { flex: 1; min-width: 0; }

/* Card Styling */
.custom-card {
    background-color: #ffffff;
    padding: 25px;
    border-radius: 15px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.05);
    margin-bottom: 20px;
    border: 1px solid #f0f0f0;
}
.custom-card.response { background-color: #eaf4fc; border-left: 5px solid #4A90E2; }

/* Highlight Colors for Text */
.hl-green { color: #27ae60; font-weight: 600; }  /* Cuisine/Hard Constraints */
.hl-purple { color: #8e44ad; font-weight: 600; } /* Vibe/Soft Constraints */
.hl-blue { color: #2980b9; font-weight: 600; }   /* Dish/Items */

/* Tab navigation */
.tab-nav { display: flex; gap: 4px; border-bottom: 2px solid #e0e0e0; margin-bottom: 20px; }
.tab-nav .tab {
    padding: 10px 18px;
    color: #666;
    text-decoration: none;
    border-radius: 8px 8px 0 0;
}
.tab-nav .tab.active { background: white; color: #111; border: 1px solid #e0e0e0; border-bottom: 2px solid white; margin-bottom: -2px; font-weight: 600; }

/* State snippet */
.code-block {
    background: #f6f8fa;
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    padding: 15px;
    font-family: 'Courier New', monospace;
    font-size: 0.85em;
    overflow-x: auto;
    white-space: pre;
}

/* Process Visualization Styles */
.arrow-down { text-align: center; font-size: 24px; color: #ccc; margin: 5px 0; }

/* Retrieval tables */
.demo-table { width: 100%; border-collapse: collapse; background: white; }
.demo-table th, .demo-table td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #eee; }
.demo-table th { background: #f5f5f5; font-weight: 600; }
.demo-table .score-high { background-color: #d4edda; }
.demo-table .score-low { background-color: #f8d7da; }
.demo-table .status-keep { color: #155724; }
.demo-table .status-discard { color: #721c24; }

/* Late fusion verdicts */
.verdict { padding: 10px 15px; border-radius: 8px; font-weight: 600; display: inline-block; }
.verdict.winner { background-color: #d4edda; color: #155724; }
.verdict.runner-up { background-color: #fff3cd; color: #856404; }

/* --- CHAT WINDOW STYLING --- */
.chat-window {
    max-width: 800px;
    margin: 0 auto;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.08);
    border: 1px solid #e0e0e0;
    overflow: hidden;
    font-size: 15px;
}

.chat-header {
    background-color: #4169E1;
    color: white;
    padding: 15px 20px;
    font-weight: 600;
    display: flex;
    align-items: center;
    gap: 10px;
}

.chat-body {
    padding: 20px;
    background-color: #fcfcfc;
    display: flex;
    flex-direction: column;
    gap: 15px;
}

.bubble {
    padding: 12px 18px;
    border-radius: 18px;
    line-height: 1.5;
    max-width: 80%;
    position: relative;
    margin-bottom: 10px;
}

/* User Bubble (Right, Blueish) */
.bubble.user {
    align-self: flex-end;
    background-color: #dceeff;
    color: #0f1e33;
    border-bottom-right-radius: 4px;
}

/* System Bubble (Left, Grey) */
.bubble.system {
    align-self: flex-start;
    background-color: #f0f2f5;
    color: #1c1e21;
    border-bottom-left-radius: 4px;
}

hr { border: none; border-top: 1px solid #e0e0e0; margin: 35px 0; }

.footer { text-align: center; margin-top: 50px; padding-bottom: 30px; color: #aaa; font-size: 0.8em; }
.footer a { color: #aaa; }
.caption { color: #888; font-size: 0.9em; }
"#;
