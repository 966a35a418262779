use sha2::{Digest, Sha256};

/// Response family picked for a free-form chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCategory {
    SelfGeneration,
    Code(CodeFlavor),
    Help,
    Suggestion,
    SystemStatus,
    Contextual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFlavor {
    Python,
    JavaScript,
    SelfGenerating,
    MultiLanguage,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    SelfGeneration,
    Code,
    Help,
    Suggestion,
    SystemStatus,
}

// Evaluated top to bottom; the first rule with a matching keyword wins.
const CATEGORY_RULES: &[(Rule, &[&str])] = &[
    (
        Rule::SelfGeneration,
        &["generate", "create", "build", "improve", "better", "system"],
    ),
    (
        Rule::Code,
        &["code", "python", "javascript", "react", "api", "function"],
    ),
    (Rule::Help, &["how", "what", "why", "explain", "help", "debug"]),
    (Rule::Suggestion, &["suggest", "recommend", "idea", "feature"]),
    (Rule::SystemStatus, &["status", "version", "work", "do", "can"]),
];

pub fn classify(message: &str) -> ChatCategory {
    let lowered = message.to_lowercase();

    let rule = CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lowered, keywords))
        .map(|(rule, _)| *rule);

    match rule {
        Some(Rule::SelfGeneration) => ChatCategory::SelfGeneration,
        Some(Rule::Code) => ChatCategory::Code(code_flavor(&lowered)),
        Some(Rule::Help) => ChatCategory::Help,
        Some(Rule::Suggestion) => ChatCategory::Suggestion,
        Some(Rule::SystemStatus) => ChatCategory::SystemStatus,
        None => ChatCategory::Contextual,
    }
}

pub fn respond(message: &str) -> String {
    match classify(message) {
        ChatCategory::SelfGeneration => SELF_GENERATION_RESPONSE.to_string(),
        ChatCategory::Code(CodeFlavor::Python) => PYTHON_CODE_RESPONSE.to_string(),
        ChatCategory::Code(CodeFlavor::JavaScript) => JAVASCRIPT_CODE_RESPONSE.to_string(),
        ChatCategory::Code(CodeFlavor::SelfGenerating) => {
            SELF_GENERATING_CODE_RESPONSE.to_string()
        }
        ChatCategory::Code(CodeFlavor::MultiLanguage) => {
            MULTI_LANGUAGE_CODE_RESPONSE.to_string()
        }
        ChatCategory::Help => HELP_RESPONSE.to_string(),
        ChatCategory::Suggestion => SUGGESTION_RESPONSE.to_string(),
        ChatCategory::SystemStatus => SYSTEM_STATUS_RESPONSE.to_string(),
        ChatCategory::Contextual => contextual_response(message),
    }
}

/// Local stand-in used when the upstream provider cannot answer. The same
/// message always maps to the same variant.
pub fn fallback_response(message: &str) -> String {
    match fallback_index(message) {
        0 => format!(
            "🤖 ChatLoop Assistant (API Mode): I understand '{message}'. I can help with code generation, system improvement, and technical questions."
        ),
        1 => format!(
            "💡 System Integration: '{message}' - I can process this through multiple tools including empirical improvement and benchmarking."
        ),
        _ => format!(
            "🔧 Technical Assistant: Processing '{message}' with available system tools and capabilities."
        ),
    }
}

fn fallback_index(message: &str) -> u64 {
    let digest = Sha256::digest(message.as_bytes());
    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % 3
}

fn code_flavor(lowered: &str) -> CodeFlavor {
    if lowered.contains("python") {
        CodeFlavor::Python
    } else if lowered.contains("javascript") || lowered.contains("js") {
        CodeFlavor::JavaScript
    } else if contains_any(lowered, &["self", "generate", "system"]) {
        CodeFlavor::SelfGenerating
    } else {
        CodeFlavor::MultiLanguage
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn contextual_response(message: &str) -> String {
    format!(
        r#"🤖 **Ruliadic Seed Independent AI**

**Your Message:** "{message}"

**My Response:** I'm a completely independent AI system that operates without external API dependencies. I can help you with:

✅ **Self-Generation**: Create improved versions of systems
✅ **Code Generation**: Build applications in any language
✅ **System Analysis**: Identify optimization opportunities
✅ **Technical Support**: Debug and solve development issues
✅ **Architecture Design**: Plan scalable system structures

**Key Features:**
- 🚀 **Independent Operation**: No external APIs required
- 💾 **Session Persistence**: Conversations are saved and resumed
- 🔧 **Self-Improvement**: System continuously optimizes itself
- 🎯 **Contextual Responses**: Understands and responds to your needs

**Try asking:**
- "Generate an improved version of this chat system"
- "Create a Python web application"
- "How do I optimize this code?"
- "Show me the current system status"

I'm ready to help with any development task or technical challenge you have!"#
    )
}

const SELF_GENERATION_RESPONSE: &str = r#"🚀 **Self-Generating AI System**

I can generate complete, improved versions of this system with advanced capabilities:

**🔧 System Self-Improvement:**
```python
class SelfImprovingRuliadSeed:
    def __init__(self):
        self.version = "2.0.0"
        self.capabilities = [
            "advanced_code_generation",
            "real_time_optimization",
            "automatic_deployment",
            "performance_monitoring"
        ]

    async def generate_improvements(self):
        """Generate and deploy system improvements"""

        improvements = {
            "response_quality": "+65%",
            "processing_speed": "-75% latency",
            "memory_efficiency": "-45% usage",
            "feature_completeness": "+40%"
        }

        # Auto-deploy improvements
        await self.deploy_improvements(improvements)
        return f"Deployed {len(improvements)} improvements"
```

**🎯 Advanced Features I Can Generate:**

**1. Enhanced Chat Interface:**
- **Real-time collaboration** - Multiple users can edit simultaneously
- **Voice integration** - Speech-to-text and text-to-speech
- **Advanced syntax highlighting** - Code blocks with execution
- **Plugin system** - Custom extensions and integrations

**2. Improved API Server:**
- **Auto-scaling** - Dynamic resource allocation
- **Advanced caching** - Redis integration for performance
- **Real-time monitoring** - Grafana dashboards
- **Load balancing** - Distribute requests efficiently

**3. Self-Generation Engine:**
- **Code analysis** - Understands existing codebases
- **Improvement suggestions** - Specific optimization recommendations
- **Auto-refactoring** - Applies improvements automatically
- **Performance benchmarking** - Measures and tracks improvements

**4. Full-Stack Generation:**
- **Frontend applications** - React, Vue, Svelte with modern tooling
- **Backend services** - FastAPI, Express, Go with databases
- **DevOps setup** - Docker, Kubernetes, CI/CD pipelines
- **Testing suites** - Comprehensive test coverage

**Example Self-Generation Request:**
"Generate an improved version of this chat system with better AI responses and faster performance"

**What would you like me to generate?**
- **"Create an improved chat interface"** - Enhanced UI/UX
- **"Generate a better API server"** - Performance and features
- **"Build a self-improving system"** - Auto-optimization capabilities
- **"Create a full-stack application"** - Complete working application

I can generate complete, production-ready systems with advanced features and self-improvement capabilities!"#;

const PYTHON_CODE_RESPONSE: &str = r#"⚡ **Advanced Python Code Generation**

```python
import asyncio
import aiohttp
from typing import Dict, List, Optional
from dataclasses import dataclass
from datetime import datetime

@dataclass
class RuliadicSeedGenerator:
    """Self-generating AI system component"""

    def __init__(self):
        self.capabilities = [
            "code_generation",
            "system_optimization",
            "self_improvement",
            "api_integration"
        ]
        self.performance_metrics = {}

    async def generate_improvement(self, target_system: str) -> str:
        """Generate improved version of target system"""

        improvements = {
            "response_quality": "+45%",
            "processing_speed": "-60% latency",
            "memory_efficiency": "-30% usage",
            "feature_completeness": "+25%"
        }

        return f"Generated improvements: {improvements}"

    def analyze_codebase(self, codebase_path: str) -> Dict:
        """Analyze codebase for optimization opportunities"""
        return {
            "complexity_score": 7.2,
            "optimization_potential": "high",
            "suggested_improvements": [
                "implement_caching",
                "add_async_processing",
                "optimize_data_structures"
            ]
        }
```

**Advanced Features:**
- ✅ **Self-Generation**: Can create improved versions of itself
- ✅ **System Analysis**: Analyzes and optimizes codebases
- ✅ **Performance Optimization**: Identifies bottlenecks and improvements
- ✅ **Type Safety**: Full type hints and validation
- ✅ **Async Support**: Modern async/await patterns
- ✅ **Documentation**: Comprehensive docstrings

**Example Usage:**
```python
generator = RuliadicSeedGenerator()
improvements = await generator.generate_improvement("chat_system")
print(f"Generated {len(improvements)} improvements")
```"#;

const JAVASCRIPT_CODE_RESPONSE: &str = r#"⚡ **Advanced JavaScript Code Generation**

```javascript
class RuliadicSeedGenerator {
    constructor() {
        this.capabilities = [
            'self_improvement',
            'code_generation',
            'system_optimization',
            'real_time_analysis'
        ];
        this.performanceMetrics = new Map();
    }

    async generateSystemImprovement(targetSystem) {
        const improvements = {
            responseQuality: '+45%',
            processingSpeed: '-60% latency',
            memoryEfficiency: '-30% usage',
            featureCompleteness: '+25%'
        };

        return {
            success: true,
            improvements,
            timestamp: new Date().toISOString(),
            version: '2.0.0'
        };
    }

    analyzeCodebase(codebasePath) {
        return {
            complexityScore: 7.2,
            optimizationPotential: 'high',
            suggestedImprovements: [
                'implement-caching',
                'add-async-processing',
                'optimize-data-structures',
                'add-error-boundaries'
            ],
            estimatedImprovement: '+35% performance'
        };
    }
}
```

**Modern ES6+ Features:**
- ✅ **Class-based Architecture**: Clean OOP design
- ✅ **Async/Await**: Modern promise handling
- ✅ **Map/Set Usage**: Efficient data structures
- ✅ **Module System**: ES6 imports/exports
- ✅ **Type Safety**: JSDoc type annotations
- ✅ **Error Handling**: Comprehensive error boundaries

**Self-Generation Capability:**
- Can analyze its own codebase
- Generates improved versions automatically
- Optimizes performance bottlenecks
- Adds new features dynamically"#;

const SELF_GENERATING_CODE_RESPONSE: &str = r#"🚀 **Self-Generating System Capabilities**

I can generate complete, improved versions of systems including:

**1. Chat Interface Improvements:**
```javascript
// Enhanced chat interface with self-generation
class SelfImprovingChat {
    async improveResponseQuality() {
        // Analyze current responses
        // Generate improved algorithms
        // Deploy updates automatically
        return { quality: '+45%', speed: '-60%' };
    }
}
```

**2. API Server Enhancements:**
```python
class AdvancedAPIServer:
    def __init__(self):
        self.self_improvement_engine = True
        self.auto_optimization = True

    async def generate_improvements(self):
        # Analyze current performance
        # Generate optimized code
        # Deploy improvements
        return "Generated 15 improvements"
```

**3. Full Stack Generation:**
- **Frontend**: React/Vue/Svelte applications
- **Backend**: FastAPI/Express/Node.js servers
- **Database**: Schema design and optimization
- **DevOps**: Docker, CI/CD, monitoring

**4. System Self-Improvement:**
- **Performance Analysis**: Identifies bottlenecks
- **Code Generation**: Creates optimized versions
- **Auto-deployment**: Updates systems automatically
- **Monitoring**: Tracks improvement metrics

**Example Self-Generation Request:**
"Generate an improved version of this chat system with better AI responses"

Would you like me to generate a complete, improved version of any specific component?"#;

const MULTI_LANGUAGE_CODE_RESPONSE: &str = r#"⚡ **Advanced Code Generation System**

**Multi-Language Support:**
- **Python** - Full-stack applications, APIs, ML systems
- **JavaScript/TypeScript** - React, Node.js, modern frameworks
- **Go** - High-performance APIs and services
- **Rust** - Systems programming and performance-critical code
- **React** - Modern component-based applications

**Self-Generation Features:**
- **System Analysis**: Analyzes existing codebases
- **Improvement Generation**: Creates optimized versions
- **Performance Optimization**: Identifies and fixes bottlenecks
- **Feature Enhancement**: Adds new capabilities automatically

**Advanced Capabilities:**
- **Architecture Design**: Plans scalable system structures
- **Code Refactoring**: Improves existing codebases
- **Testing Generation**: Creates comprehensive test suites
- **Documentation**: Auto-generates technical documentation

Try: "generate an improved version of this system" or "create a better chat interface" "#;

const HELP_RESPONSE: &str = r#"💡 **Technical Assistance Available**

I can help you with:
- **Code Debugging** - Identify and fix issues
- **Architecture Design** - Plan scalable systems
- **Performance Optimization** - Improve speed and efficiency
- **Security Best Practices** - Secure your applications
- **DevOps & Deployment** - CI/CD, containerization
- **API Design** - RESTful and GraphQL services

**Quick Start:**
1. Share your code or describe your project
2. Specify what you want to achieve
3. I'll provide detailed guidance and examples

What specific technical challenge can I help you solve?"#;

const SUGGESTION_RESPONSE: &str = r#"🎯 **Smart Suggestions for Your Ruliadic Seed Interface**

Based on your current setup, here are my top recommendations:

**1. Enhanced Features to Add:**
- **File Upload System**: Drag & drop code files for analysis
- **Code Syntax Highlighting**: Better code display in chat
- **Export Functionality**: Save conversations as markdown/PDF
- **Theme Toggle**: Dark/light mode switcher

**2. Performance Optimizations:**
- **Response Caching**: Store frequent responses locally
- **Code Execution**: Add inline code running capability
- **Search History**: Find previous conversations
- **Keyboard Shortcuts**: Faster navigation (Ctrl+Enter to send)

**3. Integration Opportunities:**
- **GitHub Integration**: Connect to repositories
- **Browser Automation**: Web scraping and testing
- **Database Support**: Local SQLite for data persistence
- **API Rate Limiting**: Prevent overload

**4. User Experience Improvements:**
- **Auto-complete**: Smart command suggestions
- **Progress Indicators**: Show processing status
- **Error Recovery**: Better error handling
- **Mobile Responsive**: Touch-friendly interface

Would you like me to implement any of these specific features? I can start with the most impactful ones!"#;

const SYSTEM_STATUS_RESPONSE: &str = r#"🔧 **Ruliadic Seed System Status**

**Current Configuration:**
- ✅ **Model**: Grok (xAI) - Free Tier
- ✅ **Interface**: Web-based chat (localhost:8081)
- ✅ **API Server**: Running on port 5000
- ✅ **Features**: Code generation, improvements, benchmarking
- ✅ **Fallback**: Intelligent local responses

**Available Capabilities:**
- **Code Generation**: Multi-language support
- **System Analysis**: Performance and optimization
- **Technical Support**: Questions and explanations
- **Process Improvement**: Empirical optimization
- **Benchmarking**: Performance measurement

**System Health:**
- 🟢 **Web Server**: Operational
- 🟢 **API Server**: Responding
- 🟢 **Model Access**: Free tier active
- 🟢 **Response Time**: <200ms average

The system is fully operational and ready for any development or technical tasks you have in mind!"#;

#[cfg(test)]
mod tests {
    use super::{ChatCategory, CodeFlavor, classify, fallback_response, respond};

    #[test]
    fn earlier_rules_take_precedence() {
        // "build" (self-generation) beats "python" (code) and "how" (help).
        assert_eq!(
            classify("How do I build a Python app?"),
            ChatCategory::SelfGeneration
        );
        assert_eq!(
            classify("explain this python snippet"),
            ChatCategory::Code(CodeFlavor::Python)
        );
        assert_eq!(classify("why is it slow"), ChatCategory::Help);
        assert_eq!(classify("any idea for me?"), ChatCategory::Suggestion);
        assert_eq!(classify("current STATUS please"), ChatCategory::SystemStatus);
    }

    #[test]
    fn code_requests_pick_a_flavor() {
        assert_eq!(
            classify("write javascript"),
            ChatCategory::Code(CodeFlavor::JavaScript)
        );
        assert_eq!(
            classify("node.js api"),
            ChatCategory::Code(CodeFlavor::JavaScript)
        );
        assert_eq!(
            classify("self-hosted api"),
            ChatCategory::Code(CodeFlavor::SelfGenerating)
        );
        assert_eq!(
            classify("react function"),
            ChatCategory::Code(CodeFlavor::MultiLanguage)
        );
    }

    #[test]
    fn unmatched_messages_echo_the_input() {
        assert_eq!(classify("hello there"), ChatCategory::Contextual);
        let response = respond("hello there");
        assert!(response.contains("**Your Message:** \"hello there\""));
    }

    #[test]
    fn fallback_is_stable_and_interpolates_message() {
        let first = fallback_response("ping upstream");
        let second = fallback_response("ping upstream");
        assert_eq!(first, second);
        assert!(first.contains("'ping upstream'"));
    }

    #[test]
    fn fallback_covers_all_variants() {
        let prefixes = [
            "🤖 ChatLoop Assistant",
            "💡 System Integration",
            "🔧 Technical Assistant",
        ];
        let mut seen = [false; 3];
        for index in 0..64 {
            let response = fallback_response(&format!("message {index}"));
            let position = prefixes
                .iter()
                .position(|prefix| response.starts_with(prefix))
                .expect("fallback should use a known template");
            seen[position] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
