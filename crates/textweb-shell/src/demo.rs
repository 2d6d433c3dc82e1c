//! Built-in sample page

pub const DEMO_HTML: &str = "<html><head><title>SCos Browser</title></head><body>\
<h1 id='title' class='header'>Welcome to SCos Browser</h1>\
<p>This browser now supports HTML, CSS, and JavaScript!</p>\
<button id='click_me' onclick='alert()'>Click Me</button>\
<div class='content'><p>Features:</p><ul><li>HTML parsing</li><li>CSS styling</li>\
<li>JavaScript execution</li><li>Interactive elements</li></ul></div></body></html>";

pub const DEMO_CSS: &str = "h1 { color: red; width: 40; } \
.header { color: yellow; } \
.content { color: green; } \
button { color: white; } \
p { color: blue; }";

pub const DEMO_JS: &str = "function alert() {  // Simple alert simulation} \
function click_me_click() {  // Button click handler}";
